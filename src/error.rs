//! Error types for the Teki library.
//!
//! This module provides error handling for all Teki operations. All errors
//! are represented by the [`TekiError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use teki::error::{Result, TekiError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(TekiError::malformed_input("row 3: expected 6 fields, found 4"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Teki operations.
///
/// This enum represents all possible errors that can occur in the Teki
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
///
/// Classification itself has no error modes: out-of-vocabulary words and
/// tied scores are ordinary outcomes, not failures.
#[derive(Error, Debug)]
pub enum TekiError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors from the underlying reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed training input (wrong field count, unknown label, etc.)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Training data that cannot support a model (a label with zero sentences)
    #[error("Degenerate training data: {0}")]
    DegenerateTraining(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TekiError.
pub type Result<T> = std::result::Result<T, TekiError>;

impl TekiError {
    /// Create a new malformed input error.
    pub fn malformed_input<S: Into<String>>(msg: S) -> Self {
        TekiError::MalformedInput(msg.into())
    }

    /// Create a new degenerate training data error.
    pub fn degenerate_training<S: Into<String>>(msg: S) -> Self {
        TekiError::DegenerateTraining(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TekiError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TekiError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TekiError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        TekiError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TekiError::malformed_input("row 2: expected 6 fields, found 3");
        assert_eq!(
            error.to_string(),
            "Malformed input: row 2: expected 6 fields, found 3"
        );

        let error = TekiError::degenerate_training("no ORAL sentences");
        assert_eq!(
            error.to_string(),
            "Degenerate training data: no ORAL sentences"
        );

        let error = TekiError::invalid_argument("bad delimiter");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad delimiter");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let teki_error = TekiError::from(io_error);

        match teki_error {
            TekiError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
