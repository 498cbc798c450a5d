//! Mock connection handle for testing
//!
//! Deterministic, configurable responses without network dependencies.
//! Records every invocation so dispatch tests can assert exactly which
//! backend and model were used, or that no backend was contacted at all.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChatClient, ChatCompletion, CompletionOptions};
use super::BackendId;
use crate::types::ChatMessage;

/// Mock response mode
#[derive(Debug, Clone)]
enum MockMode {
    /// Return a single choice with the given text
    Fixed(String),
    /// Return a successful response with no choices
    Empty,
    /// Return a successful response whose first choice has no content
    MissingContent,
    /// Fail with an API error carrying the given status
    Status { status: u16, message: String },
    /// Fail with an opaque error message
    Fail(String),
}

/// One recorded call to `chat_completion`
#[derive(Debug, Clone)]
pub struct Invocation {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub options: CompletionOptions,
}

/// Mock backend client for tests
pub struct MockChatClient {
    provider: BackendId,
    mode: MockMode,
    calls: Mutex<Vec<Invocation>>,
}

impl MockChatClient {
    fn with_mode(provider: BackendId, mode: MockMode) -> Arc<Self> {
        Arc::new(Self {
            provider,
            mode,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Client that always answers with `text`
    pub fn fixed(provider: BackendId, text: impl Into<String>) -> Arc<Self> {
        Self::with_mode(provider, MockMode::Fixed(text.into()))
    }

    /// Client that answers successfully with zero choices
    pub fn empty(provider: BackendId) -> Arc<Self> {
        Self::with_mode(provider, MockMode::Empty)
    }

    /// Client whose answer carries a choice without content
    pub fn missing_content(provider: BackendId) -> Arc<Self> {
        Self::with_mode(provider, MockMode::MissingContent)
    }

    /// Client that fails with an HTTP-style status
    pub fn status(provider: BackendId, status: u16, message: impl Into<String>) -> Arc<Self> {
        Self::with_mode(
            provider,
            MockMode::Status {
                status,
                message: message.into(),
            },
        )
    }

    /// Client that fails with an opaque message
    pub fn failing(provider: BackendId, message: impl Into<String>) -> Arc<Self> {
        Self::with_mode(provider, MockMode::Fail(message.into()))
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Snapshot of the recorded invocations
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    fn provider(&self) -> BackendId {
        self.provider
    }

    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> ProviderResult<ChatCompletion> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Invocation {
                model: model.to_string(),
                messages: messages.to_vec(),
                options,
            });
        }

        match &self.mode {
            MockMode::Fixed(text) => Ok(ChatCompletion::from_text(text.clone())),
            MockMode::Empty => Ok(ChatCompletion::empty()),
            MockMode::MissingContent => Ok(ChatCompletion::without_content()),
            MockMode::Status { status, message } => Err(ProviderError::api_error(
                self.provider.as_str(),
                *status,
                message.clone(),
            )),
            MockMode::Fail(message) => Err(ProviderError::Other(message.clone())),
        }
    }
}
