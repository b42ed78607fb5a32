use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CodeRequest {
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "python".to_string()
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CodeResponse {
    pub code: String,
    pub explanation: String,
}

/// Body shared by the explain and optimize endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CodeBody {
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OptimizeResponse {
    pub optimized_code: String,
}
