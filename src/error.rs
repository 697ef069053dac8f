//! Error types for the prefixsim library.
//!
//! The matching core (tree, stack, scorer, engine) never fails: lookup misses
//! and empty inputs are ordinary values. Errors only come from the surfaces
//! around it: dictionary and configuration files, JSON, and the CLI.
//!
//! # Examples
//!
//! ```
//! use prefixsim::error::{PrefixSimError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PrefixSimError::invalid_argument("threshold must be a number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for prefixsim operations.
#[derive(Error, Debug)]
pub enum PrefixSimError {
    /// I/O errors (dictionary files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PrefixSimError.
pub type Result<T> = std::result::Result<T, PrefixSimError>;

impl PrefixSimError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PrefixSimError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PrefixSimError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PrefixSimError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = PrefixSimError::invalid_argument("bad threshold");
        assert_eq!(error.to_string(), "Invalid argument: bad threshold");

        let error = PrefixSimError::config("page size must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: page size must be positive"
        );

        let error = PrefixSimError::other("boom");
        assert_eq!(error.to_string(), "Error: boom");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PrefixSimError::from(io_error);

        match error {
            PrefixSimError::Io(_) => {} // Expected
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error: PrefixSimError = json_error.into();
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
