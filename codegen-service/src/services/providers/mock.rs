//! Scripted provider for testing.

use super::{CompletionProvider, CompletionRequest, ProviderError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued replies in order and records every request it receives.
///
/// When the queue is empty the last reply is repeated; with nothing queued at all
/// every call fails with `NotConfigured`.
#[derive(Default)]
pub struct MockCompletionProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    last: Mutex<Option<Result<String, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(text: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.push_reply(text);
        provider
    }

    pub fn with_error(error: ProviderError) -> Self {
        let provider = Self::new();
        provider.push_error(error);
        provider
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.lock_replies().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: ProviderError) {
        self.lock_replies().push_back(Err(error));
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, ProviderError>>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(reply) = self.lock_replies().pop_front() {
            *last = Some(reply);
        }

        last.clone().unwrap_or_else(|| {
            Err(ProviderError::NotConfigured(
                "Mock provider has no scripted reply".to_string(),
            ))
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
