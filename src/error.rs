//! Error types for the Muqabala library.
//!
//! All errors are represented by the [`MuqabalaError`] enum. Well-formed
//! string inputs never fail: the alignment and correction routines report
//! recoverable outcomes as data (distance sentinels, absent rule results,
//! fusion flags), so this enum only covers the ambient surface such as
//! tokenizer construction and config (de)serialization.
//!
//! # Examples
//!
//! ```
//! use muqabala::error::{MuqabalaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MuqabalaError::invalid_argument("Invalid input"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use thiserror::Error;

/// The main error type for Muqabala operations.
#[derive(Error, Debug)]
pub enum MuqabalaError {
    /// Analysis-related errors (tokenization, normalization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Alignment-related errors.
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// Correction-related errors.
    #[error("Correction error: {0}")]
    Correction(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with MuqabalaError.
pub type Result<T> = std::result::Result<T, MuqabalaError>;

impl MuqabalaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MuqabalaError::Analysis(msg.into())
    }

    /// Create a new alignment error.
    pub fn alignment<S: Into<String>>(msg: S) -> Self {
        MuqabalaError::Alignment(msg.into())
    }

    /// Create a new correction error.
    pub fn correction<S: Into<String>>(msg: S) -> Self {
        MuqabalaError::Correction(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MuqabalaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MuqabalaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MuqabalaError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = MuqabalaError::alignment("Test alignment error");
        assert_eq!(error.to_string(), "Alignment error: Test alignment error");

        let error = MuqabalaError::invalid_argument("bad cutoff");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad cutoff");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = MuqabalaError::from(json_error);

        match error {
            MuqabalaError::Json(_) => {}
            _ => panic!("Expected JSON error variant"),
        }
    }
}
