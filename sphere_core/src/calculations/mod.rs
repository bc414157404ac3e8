//! # Segment Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! [`RunningTotals`] accumulates results across a run and yields the averages.
//!
//! ## Available Calculations
//!
//! - [`segment`] - Surface area and volume of a spherical segment

pub mod segment;

use serde::{Deserialize, Serialize};

pub use segment::{calculate, SegmentInput, SegmentResult};

/// Sums of total area and volume over the segments processed so far.
///
/// Values are added unrounded; rounding happens only when a report line is
/// formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningTotals {
    /// Sum of segment total areas
    pub area: f64,

    /// Sum of segment volumes
    pub volume: f64,

    /// Number of segments added
    pub count: u32,
}

impl RunningTotals {
    pub fn new() -> Self {
        RunningTotals::default()
    }

    /// Fold one segment result into the totals.
    pub fn add(&mut self, result: &SegmentResult) {
        self.area += result.total_area;
        self.volume += result.volume;
        self.count += 1;
    }

    /// Averages over `count` segments, or `None` before any segment is added.
    pub fn averages(&self) -> Option<Averages> {
        if self.count == 0 {
            return None;
        }
        let n = f64::from(self.count);
        Some(Averages {
            area: self.area / n,
            volume: self.volume / n,
        })
    }
}

/// Mean total area and mean volume across a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub area: f64,
    pub volume: f64,
}
