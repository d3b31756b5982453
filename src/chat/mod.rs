//! Chat boundary types
//!
//! The formatting engine sits between two HTTP collaborators: an upload proxy
//! that turns an image into a URL, and a vision API that answers questions
//! about it. This module models their payloads and the chat messages built
//! from them. No network I/O happens here.

mod message;
mod upload;
mod vision;

use thiserror::Error;

pub use message::Message;
pub use upload::{UploadData, UploadResponse};
pub use vision::{VisionRequest, VisionResponse, DEFAULT_MODEL, VISION_ENDPOINT};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("question is empty")]
    EmptyQuestion,

    #[error("no image has been uploaded")]
    MissingImage,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("upload failed: {error}")]
    UploadFailed {
        error: String,
        message: Option<String>,
    },

    #[error("upload returned a non-URL: {0}")]
    InvalidUploadUrl(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
