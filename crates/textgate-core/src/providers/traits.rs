//! Connection-handle trait and the chat-completion wire shape

use async_trait::async_trait;
use serde::Deserialize;

use super::error::ProviderResult;
use super::BackendId;
use crate::types::{ChatMessage, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Tuning options for a single completion request
///
/// Unlike the caller-facing `GenerationParams`, these are fully resolved:
/// defaults have already been applied by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// One chat-completion response from a backend
///
/// Mirrors the OpenAI-compatible `{choices: [{message: {content}}]}`
/// shape. Deserialization is tolerant: a structurally empty but successful
/// response is represented, not rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One choice within a completion response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ResponseMessage,
}

/// The assistant message carried by a choice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice's message, if present
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }

    /// Build a completion carrying a single text choice
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some(text.into()),
                },
            }],
        }
    }

    /// Build a completion with no choices at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a completion whose first choice carries no content
    pub fn without_content() -> Self {
        Self {
            choices: vec![Choice::default()],
        }
    }
}

/// Connection handle to one backend's chat-completion API
///
/// A handle is bound to a base endpoint and credential at construction and
/// is opaque to the dispatcher. Credential validation is lazy: it happens
/// on the first real call, never at construction time.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// The backend this handle is bound to
    fn provider(&self) -> BackendId;

    /// Execute one chat completion
    ///
    /// A single attempt with no internal retry; timeout behavior is
    /// whatever the underlying HTTP client defaults to.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> ProviderResult<ChatCompletion>;
}
