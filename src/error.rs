//! Error types for number-lookup
//!
//! Two families live here:
//! - [`Error`] for failures that abort an operation (bad configuration, an
//!   unreadable batch file, a client that cannot be built)
//! - [`RejectionReason`] for target numbers refused before any network call
//!
//! Lookup failures (timeouts, HTTP errors, malformed bodies) are not errors in
//! this sense; they are carried as [`crate::types::LookupResult::Failure`] and
//! rendered like any other result.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for number-lookup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for number-lookup
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "endpoint")
        key: Option<String>,
    },

    /// Batch file does not exist
    #[error("NOT FOUND: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Batch file exists but could not be read
    #[error("{}: {source}", path.display())]
    FileRead {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction or transport error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a specific key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Whether this error came from reading the batch file
    pub fn is_file_error(&self) -> bool {
        matches!(self, Error::FileNotFound(_) | Error::FileRead { .. })
    }
}

/// Why a raw input was refused as a target number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// Input contains something other than ASCII digits, or nothing at all
    #[error("INVALID CHARACTERS IN TARGET")]
    InvalidCharacters,

    /// Fewer than the minimum number of digits
    #[error("INSUFFICIENT TARGET DIGITS")]
    TooShort,

    /// More than the maximum number of digits
    #[error("EXCESSIVE TARGET DIGITS")]
    TooLong,
}
