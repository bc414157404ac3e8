//! # Error Types
//!
//! Structured error types for sphere_core. Recoverable variants describe a
//! bad value typed at a prompt; the session answers them with a re-prompt.
//! Fatal variants end the session.
//!
//! ## Example
//!
//! ```rust
//! use sphere_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius: f64) -> CalcResult<()> {
//!     if radius <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "radius".to_string(),
//!             value: radius.to_string(),
//!             reason: "Radius must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sphere_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and session operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value parsed but violates a range or ordering constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A token could not be parsed as the expected number type
    #[error("Malformed input for '{field}': '{token}' is not a number")]
    MalformedInput { field: String, token: String },

    /// The input stream ended while a value was still expected
    #[error("Input ended while waiting for '{field}'")]
    InputExhausted { field: String },

    /// Reading from or writing to the console failed
    #[error("I/O error during {operation}: {reason}")]
    Io { operation: String, reason: String },

    /// Session settings are inconsistent
    #[error("Invalid settings for '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(field: impl Into<String>, token: impl Into<String>) -> Self {
        CalcError::MalformedInput {
            field: field.into(),
            token: token.into(),
        }
    }

    /// Create an InputExhausted error
    pub fn input_exhausted(field: impl Into<String>) -> Self {
        CalcError::InputExhausted { field: field.into() }
    }

    /// Create an Io error from a std I/O failure
    pub fn io(operation: impl Into<String>, err: &std::io::Error) -> Self {
        CalcError::Io {
            operation: operation.into(),
            reason: err.to_string(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error can be answered with a re-prompt
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::MalformedInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MalformedInput { .. } => "MALFORMED_INPUT",
            CalcError::InputExhausted { .. } => "INPUT_EXHAUSTED",
            CalcError::Io { .. } => "IO_ERROR",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("top_height", "6", "Top height exceeds radius");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::malformed_input("radius", "abc").error_code(), "MALFORMED_INPUT");
        assert_eq!(CalcError::input_exhausted("segment_count").error_code(), "INPUT_EXHAUSTED");
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::invalid_input("radius", "-1", "Radius must be positive").is_recoverable());
        assert!(CalcError::malformed_input("radius", "x").is_recoverable());
        assert!(!CalcError::input_exhausted("radius").is_recoverable());
        assert!(!CalcError::invalid_settings("max_segments", "too small").is_recoverable());
    }

    #[test]
    fn test_io_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = CalcError::io("write prompt", &io);
        assert_eq!(err.to_string(), "I/O error during write prompt: pipe closed");
    }
}
