use serde::{Deserialize, Serialize};

use super::ChatError;

/// JSON body returned by the upload proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<UploadData>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub url: String,
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
}

impl UploadResponse {
    pub fn from_json(body: &str) -> Result<Self, ChatError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The hosted image URL, if the upload succeeded and returned a URL.
    pub fn into_url(self) -> Result<String, ChatError> {
        if !self.success {
            return Err(ChatError::UploadFailed {
                error: self.error.unwrap_or_else(|| "Upload failed".to_string()),
                message: self.message,
            });
        }
        let data = self
            .data
            .ok_or_else(|| ChatError::InvalidResponse("upload response has no data".into()))?;
        let url = data.url.trim();
        if !url.starts_with("http") {
            return Err(ChatError::InvalidUploadUrl(url.to_string()));
        }
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_upload() {
        let body = r#"{
            "success": true,
            "data": {
                "url": "https://files.catbox.moe/abc123.png",
                "fileName": "plot.png",
                "size": 2048,
                "mimeType": "image/png"
            }
        }"#;
        let resp = UploadResponse::from_json(body).unwrap();
        assert_eq!(resp.data.as_ref().unwrap().file_name, "plot.png");
        assert_eq!(resp.into_url().unwrap(), "https://files.catbox.moe/abc123.png");
    }

    #[test]
    fn test_failed_upload() {
        let body = r#"{"success":false,"error":"Upload failed","message":"timeout"}"#;
        match UploadResponse::from_json(body).unwrap().into_url() {
            Err(ChatError::UploadFailed { error, message }) => {
                assert_eq!(error, "Upload failed");
                assert_eq!(message.as_deref(), Some("timeout"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_non_url_payload() {
        let body = r#"{
            "success": true,
            "data": {
                "url": "error: file too big",
                "fileName": "x",
                "size": 1,
                "mimeType": "image/png"
            }
        }"#;
        assert!(matches!(
            UploadResponse::from_json(body).unwrap().into_url(),
            Err(ChatError::InvalidUploadUrl(_))
        ));
    }
}
