use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct FileCreateRequest {
    #[validate(length(min = 1, message = "filename must not be empty"))]
    pub filename: String,
    pub content: String,
}

/// Upload body; both fields are optional and defaulted.
#[derive(Debug, Deserialize, Validate)]
pub struct FileUploadRequest {
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default)]
    pub content: String,
}

fn default_filename() -> String {
    "unknown".to_string()
}

/// Acknowledgement returned by the storage stubs. Nothing is persisted.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FileAck {
    pub status: String,
    pub message: String,
    pub filename: String,
    /// Length of the content in characters.
    pub size: usize,
}

impl FileAck {
    pub fn success(message: String, filename: String, content: &str) -> Self {
        Self {
            status: "success".to_string(),
            message,
            filename,
            size: content.chars().count(),
        }
    }
}
