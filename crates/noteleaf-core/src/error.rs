//! Error types for noteleaf.

use thiserror::Error;

use crate::ids::NoteId;

/// Result type alias using noteleaf's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for noteleaf operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is empty or otherwise fails validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// Malformed request input (missing or non-textual content)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// External completion API returned a failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Model output could not be parsed as the expected JSON shape.
    /// Handled internally via fallback normalization, never surfaced.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// Insight request to the proxy failed
    #[error("AI request failed: {0}")]
    AiRequest(String),

    /// Operation was cancelled via its cancellation token
    #[error("Operation cancelled")]
    Cancelled,

    /// Key-value store operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
