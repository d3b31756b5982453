use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use visionfmt_ir::Document;

use super::ChatError;
use crate::core::{segment_with_options, FormatOptions};

const PROCESSING_FAILED: &str = "Failed to process request. Please try again.";

/// One entry in the chat transcript, tagged by role.
///
/// Only assistant messages carry a formatted document; every other role is
/// shown as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    User {
        content: String,
        timestamp: DateTime<Utc>,
    },
    System {
        content: String,
        image_url: Option<String>,
        timestamp: DateTime<Utc>,
    },
    Assistant {
        document: Document,
        timestamp: DateTime<Utc>,
    },
    Error {
        content: String,
        timestamp: DateTime<Utc>,
    },
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Notice shown once an image has been hosted.
    pub fn image_uploaded(url: impl Into<String>) -> Self {
        let url = url.into();
        Message::System {
            content: format!("Image uploaded successfully!\nURL: {}", url),
            image_url: Some(url),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(answer: &str) -> Self {
        Self::assistant_with_options(answer, &FormatOptions::default())
    }

    pub fn assistant_with_options(answer: &str, options: &FormatOptions) -> Self {
        Message::Assistant {
            document: segment_with_options(answer, options),
            timestamp: Utc::now(),
        }
    }

    /// Error text is never formatted.
    pub fn error(content: impl Into<String>) -> Self {
        Message::Error {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Message for the outcome of a vision request.
    ///
    /// Failures collapse into a generic error message; the cause is logged.
    pub fn from_vision_result(result: Result<String, ChatError>, options: &FormatOptions) -> Self {
        match result {
            Ok(answer) => Self::assistant_with_options(&answer, options),
            Err(err) => {
                warn!(error = %err, "vision request failed");
                Self::error(PROCESSING_FAILED)
            }
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Message::User { .. } => "user",
            Message::System { .. } => "system",
            Message::Assistant { .. } => "assistant",
            Message::Error { .. } => "error",
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Message::User { timestamp, .. }
            | Message::System { timestamp, .. }
            | Message::Assistant { timestamp, .. }
            | Message::Error { timestamp, .. } => *timestamp,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Message::Assistant { document, .. } => Some(document),
            _ => None,
        }
    }
}
