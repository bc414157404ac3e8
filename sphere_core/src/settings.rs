//! # Session Settings
//!
//! Tunables for a calculator session. The defaults reproduce the classic
//! console behavior: between 2 and 10 segments, results shown to 2 decimals.
//!
//! ## Example
//!
//! ```rust
//! use sphere_core::settings::SessionSettings;
//!
//! let settings = SessionSettings::default();
//! assert!(settings.validate().is_ok());
//! assert!(settings.accepts_count(10));
//! assert!(!settings.accepts_count(11));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Settings shared by every prompt and report line in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Smallest accepted segment count
    pub min_segments: u32,

    /// Largest accepted segment count
    pub max_segments: u32,

    /// Digits after the decimal point in echo and result lines
    pub decimals: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            min_segments: 2,
            max_segments: 10,
            decimals: 2,
        }
    }
}

impl SessionSettings {
    /// Check that the bounds describe a non-empty range of positive counts.
    pub fn validate(&self) -> CalcResult<()> {
        if self.min_segments == 0 {
            return Err(CalcError::invalid_settings(
                "min_segments",
                "At least one segment is required",
            ));
        }
        if self.min_segments > self.max_segments {
            return Err(CalcError::invalid_settings(
                "max_segments",
                format!(
                    "max_segments ({}) is below min_segments ({})",
                    self.max_segments, self.min_segments
                ),
            ));
        }
        Ok(())
    }

    /// Whether `n` lies within `[min_segments, max_segments]`.
    pub fn accepts_count(&self, n: i64) -> bool {
        n >= i64::from(self.min_segments) && n <= i64::from(self.max_segments)
    }
}
