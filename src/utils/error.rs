//! Error handling for visionfmt
//!
//! Formatting itself never fails. Errors come from the surfaces around it:
//! reading input, loading configuration, and decoding collaborator payloads.

use thiserror::Error;

use crate::chat::ChatError;

#[derive(Debug, Error)]
pub enum VfmtError {
    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A chat collaborator returned something unusable
    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// Result type for fallible visionfmt operations
pub type Result<T> = std::result::Result<T, VfmtError>;
