//! Shared error types for the stage pipeline.

use thiserror::Error;

/// Main error type for dicomcheck operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Aggregate validation failure: malformed DICOM input was found.
    ///
    /// This is the only error that ends a run unsuccessfully; per-file
    /// decode failures are counted, and infrastructure failures are
    /// logged and recovered from.
    #[error("{count} invalid DICOM part-10 file(s) found")]
    InvalidFiles { count: usize },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
