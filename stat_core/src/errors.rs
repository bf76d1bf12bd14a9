//! # Error Types
//!
//! Structured error types for stat_core. These errors carry enough context
//! to be rendered to the user verbatim or handled programmatically.
//!
//! ## Example
//!
//! ```rust
//! use stat_core::errors::{StatError, StatResult};
//!
//! fn validate_bins(bins: usize) -> StatResult<()> {
//!     if bins == 0 {
//!         return Err(StatError::InvalidInput {
//!             field: "bins".to_string(),
//!             value: bins.to_string(),
//!             reason: "Bin count must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stat_core operations
pub type StatResult<T> = Result<T, StatError>;

/// Structured error type for statistics and session operations.
///
/// Each variant provides specific context about what went wrong,
/// so front-ends can show the failing token instead of a generic message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StatError {
    /// A token in the comma-separated input is not a finite number
    #[error("Invalid number: '{token}' is not a finite numeric value")]
    InvalidNumber { token: String },

    /// The input contained no values at all
    #[error("Empty sample: input contains no values")]
    EmptySample,

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl StatError {
    /// Create an InvalidNumber error
    pub fn invalid_number(token: impl Into<String>) -> Self {
        StatError::InvalidNumber {
            token: token.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StatError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StatError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        StatError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// True for user-typed input problems, which front-ends collapse into
    /// the "Invalid input" labels rather than an error panel.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StatError::InvalidNumber { .. }
                | StatError::EmptySample
                | StatError::InvalidInput { .. }
        )
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StatError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StatError::InvalidNumber { .. } => "INVALID_NUMBER",
            StatError::EmptySample => "EMPTY_SAMPLE",
            StatError::InvalidInput { .. } => "INVALID_INPUT",
            StatError::FileError { .. } => "FILE_ERROR",
            StatError::FileLocked { .. } => "FILE_LOCKED",
            StatError::SerializationError { .. } => "SERIALIZATION_ERROR",
            StatError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = StatError::invalid_number("abc");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: StatError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StatError::EmptySample.error_code(), "EMPTY_SAMPLE");
        assert_eq!(
            StatError::invalid_number("x").error_code(),
            "INVALID_NUMBER"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(StatError::EmptySample.is_input_error());
        assert!(StatError::invalid_number("?").is_input_error());
        assert!(!StatError::file_error("open", "a.cts", "denied").is_input_error());
    }
}
