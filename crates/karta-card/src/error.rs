//! Error types for card document handling.

use thiserror::Error;

/// Errors that can occur when reading or writing card documents.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document declares a spec this library does not understand.
    #[error("unsupported card spec: {0:?}")]
    UnsupportedSpec(String),
}

/// Result type for card operations.
pub type Result<T> = std::result::Result<T, Error>;
