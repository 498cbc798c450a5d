//! Backend identities and connection handles
//!
//! This module contains everything provider-facing: the closed set of
//! backend ids, the chat-completion client trait and its HTTP and mock
//! implementations, the error taxonomy, and the registry of configured
//! backends.
//!
//! ## Architecture
//!
//! All backends speak the OpenAI-compatible chat-completion wire format,
//! so a single `HttpChatClient` serves every variant; only the base
//! endpoint and credential differ. Adding a backend means adding one
//! `BackendId` variant with its catalog and credential slot - dispatch
//! logic never branches on backend names.

mod error;
mod http;
mod mock;
mod registry;
mod traits;

pub use error::{ProviderError, ProviderResult};
pub use http::HttpChatClient;
pub use mock::{Invocation, MockChatClient};
pub use registry::{Backend, BackendRegistry};
pub use traits::{ChatClient, ChatCompletion, Choice, CompletionOptions, ResponseMessage};

use serde::{Deserialize, Serialize};

/// Identity of one upstream text-generation backend
///
/// The set is closed and fixed for the process lifetime. `ALL` lists the
/// variants in priority order, which is also the order credentials are
/// checked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    OpenAi,
    Groq,
    OpenRouter,
}

impl BackendId {
    /// All backends, in priority order
    pub const ALL: [BackendId; 3] = [BackendId::OpenAi, BackendId::Groq, BackendId::OpenRouter];

    /// Wire-level id (also the secret-store key)
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendId::OpenAi => "openai",
            BackendId::Groq => "groq",
            BackendId::OpenRouter => "openrouter",
        }
    }

    /// Credential slot in the environment
    pub fn env_var(&self) -> &'static str {
        match self {
            BackendId::OpenAi => "OPENAI_API_KEY",
            BackendId::Groq => "GROQ_API_KEY",
            BackendId::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// Base endpoint of the chat-completion API
    pub fn api_base(&self) -> &'static str {
        match self {
            BackendId::OpenAi => "https://api.openai.com/v1",
            BackendId::Groq => "https://api.groq.com/openai/v1",
            BackendId::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    /// Supported model catalog, used for enumeration only
    ///
    /// A requested model is passed to the backend verbatim, without
    /// validation against this list.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            BackendId::OpenAi => &[
                "gpt-4o-mini",
                "gpt-4o",
                "gpt-4.1-mini",
                "gpt-4.1",
                "o4-mini",
            ],
            BackendId::Groq => &[
                "llama-3.3-70b-versatile",
                "llama-3.1-8b-instant",
                "gemma2-9b-it",
                "deepseek-r1-distill-llama-70b",
            ],
            BackendId::OpenRouter => &[
                "anthropic/claude-3.5-sonnet",
                "openai/gpt-4o",
                "meta-llama/llama-3.1-70b-instruct",
                "mistralai/mistral-large",
            ],
        }
    }

    /// Designated default model for this backend
    pub fn default_model(&self) -> &'static str {
        match self {
            BackendId::OpenAi => "gpt-4o-mini",
            BackendId::Groq => "llama-3.3-70b-versatile",
            BackendId::OpenRouter => "anthropic/claude-3.5-sonnet",
        }
    }

    /// Parse a backend id from its wire name, case-insensitively
    ///
    /// Unknown names resolve to `None`; callers treat that the same as an
    /// unconfigured backend.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(BackendId::OpenAi),
            "groq" => Some(BackendId::Groq),
            "openrouter" => Some(BackendId::OpenRouter),
            _ => None,
        }
    }
}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            BackendId::ALL,
            [BackendId::OpenAi, BackendId::Groq, BackendId::OpenRouter]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(BackendId::parse("openai"), Some(BackendId::OpenAi));
        assert_eq!(BackendId::parse("Groq"), Some(BackendId::Groq));
        assert_eq!(BackendId::parse("OPENROUTER"), Some(BackendId::OpenRouter));
        assert_eq!(BackendId::parse("palm"), None);
        assert_eq!(BackendId::parse(""), None);
    }

    #[test]
    fn test_default_model_is_in_catalog() {
        for id in BackendId::ALL {
            assert!(
                id.models().contains(&id.default_model()),
                "default model of {} must be in its catalog",
                id
            );
            assert!(!id.models().is_empty());
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for id in BackendId::ALL {
            assert_eq!(BackendId::parse(id.as_str()), Some(id));
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }
}
