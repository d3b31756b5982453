use serde::{Deserialize, Serialize};

use super::ChatError;

pub const VISION_ENDPOINT: &str = "https://api.bk9.dev/ai/vision";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// A question about an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionRequest {
    pub question: String,
    pub image_url: String,
    pub model: String,
}

impl VisionRequest {
    /// Build a request for the default model.
    ///
    /// The question must contain something other than whitespace and an
    /// image URL must already be known.
    pub fn new(
        question: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, ChatError> {
        let question = question.into();
        let image_url = image_url.into();
        if question.trim().is_empty() {
            return Err(ChatError::EmptyQuestion);
        }
        if image_url.is_empty() {
            return Err(ChatError::MissingImage);
        }
        Ok(Self {
            question,
            image_url,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// GET URL carrying the question, image and model as query parameters
    pub fn url(&self) -> String {
        format!(
            "{}?q={}&image_url={}&model={}",
            VISION_ENDPOINT,
            urlencoding::encode(&self.question),
            urlencoding::encode(&self.image_url),
            urlencoding::encode(&self.model),
        )
    }
}

/// JSON body returned by the vision API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(rename = "BK9", default)]
    pub answer: Option<String>,
}

impl VisionResponse {
    pub fn from_json(body: &str) -> Result<Self, ChatError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The answer text. The status flag is not trusted on its own; a
    /// response without answer text is invalid.
    pub fn into_answer(self) -> Result<String, ChatError> {
        match self.answer {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Err(ChatError::InvalidResponse("Invalid response format".into())),
        }
    }
}
