//! Completion gateway: builds the fixed prompts, calls the provider, shapes replies.

use super::providers::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError};
use super::shaping::{shape_generated, ShapedResponse};
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

pub const GENERATE_MAX_TOKENS: u32 = 1500;
pub const EXPLAIN_MAX_TOKENS: u32 = 800;
pub const OPTIMIZE_MAX_TOKENS: u32 = 1200;

const EXPLAIN_SYSTEM_PROMPT: &str =
    "You are a helpful coding assistant. Explain the provided code in simple terms.";
const OPTIMIZE_SYSTEM_PROMPT: &str = "You are a helpful coding assistant. Optimize the provided code for better performance, readability, and best practices.";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The completion call failed; carries the provider error untouched.
    #[error("{0}")]
    Upstream(#[from] ProviderError),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream(e) => AppError::UpstreamFailure(e.to_string()),
        }
    }
}

pub fn generation_system_prompt(language: &str) -> String {
    format!(
        "You are a helpful coding assistant. Generate {} code based on the user's request. Provide both the code and a brief explanation.",
        language
    )
}

/// Stateless front for the upstream provider. Cheap to clone.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.provider
    }

    /// Generate code in `language` for `prompt`, split into code and explanation.
    #[tracing::instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate(
        &self,
        prompt: &str,
        language: &str,
    ) -> Result<ShapedResponse, GatewayError> {
        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(generation_system_prompt(language)),
                ChatMessage::user(prompt),
            ],
            max_tokens: GENERATE_MAX_TOKENS,
        };

        let text = self.call("generate", &request).await?;
        Ok(shape_generated(&text))
    }

    /// Explain `code`; the reply is returned as-is.
    #[tracing::instrument(skip(self, code), fields(code_len = code.len()))]
    pub async fn explain(&self, code: &str) -> Result<String, GatewayError> {
        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(EXPLAIN_SYSTEM_PROMPT),
                ChatMessage::user(format!("Please explain this code: {}", code)),
            ],
            max_tokens: EXPLAIN_MAX_TOKENS,
        };

        self.call("explain", &request).await
    }

    /// Optimize `code`; the reply is returned as-is.
    #[tracing::instrument(skip(self, code), fields(code_len = code.len()))]
    pub async fn optimize(&self, code: &str) -> Result<String, GatewayError> {
        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(OPTIMIZE_SYSTEM_PROMPT),
                ChatMessage::user(format!("Please optimize this code: {}", code)),
            ],
            max_tokens: OPTIMIZE_MAX_TOKENS,
        };

        self.call("optimize", &request).await
    }

    async fn call(
        &self,
        operation: &'static str,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        match self.provider.complete(request).await {
            Ok(text) => {
                metrics::counter!("completion_calls_total", "operation" => operation, "status" => "ok")
                    .increment(1);
                tracing::info!(operation, reply_len = text.len(), "Completion succeeded");
                Ok(text)
            }
            Err(e) => {
                metrics::counter!("completion_calls_total", "operation" => operation, "status" => "error")
                    .increment(1);
                tracing::warn!(operation, error = %e, "Completion failed");
                Err(GatewayError::Upstream(e))
            }
        }
    }
}
