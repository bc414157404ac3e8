//! # sphere_core - Spherical Segment Calculation Engine
//!
//! `sphere_core` computes the surface area and volume of spherical segments
//! and runs the interactive prompt loop that collects their measurements.
//! The loop is generic over its reader and writer, so a whole console session
//! can be driven from a string in tests.
//!
//! ## Design Philosophy
//!
//! - **Stateless math**: Pure functions that take input and return results
//! - **JSON-First**: All data types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use sphere_core::calculations::{calculate, SegmentInput};
//!
//! let result = calculate(&SegmentInput::new(5.0, 4.0, 3.0)).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("total_area"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Segment formulas and running totals
//! - [`session`] - Prompt, validate, compute, report loop
//! - [`input`] - Whitespace token reader
//! - [`report`] - Console line formatting
//! - [`settings`] - Session bounds and display precision
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod input;
pub mod report;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Averages, RunningTotals, SegmentInput, SegmentResult};
pub use errors::{CalcError, CalcResult};
pub use session::{Session, SessionSummary};
pub use settings::SessionSettings;
