//! TextGate Core
//!
//! Transport-agnostic core of the textgate MCP server: the backend
//! registry, the tool catalog, and the dispatcher that routes each tool
//! call to one of the configured text-generation backends.
//!
//! The MCP transport itself lives in the `textgate-mcp` crate; this crate
//! can be driven from any protocol surface.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use textgate_core::{BackendRegistry, Dispatcher, EnvSecretStore, StderrLogger};
//!
//! let logger: textgate_core::SharedLogger = Arc::new(StderrLogger::new());
//! let registry = BackendRegistry::from_secret_store(&EnvSecretStore::new(), &logger);
//! let dispatcher = Dispatcher::new(Arc::new(registry), logger);
//!
//! // Per incoming call:
//! let response = dispatcher.handle_tool_call("generate_text", &arguments).await;
//! ```

pub mod catalog;
pub mod dispatch;
pub mod logging;
pub mod providers;
pub mod secrets;
pub mod types;

// Re-export commonly used types
pub use types::{
    ChatMessage, GenerationParams, MessageRole, ToolResponse,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};

pub use secrets::{EnvSecretStore, MemorySecretStore, SecretStore};

pub use logging::{Logger, NoOpLogger, SharedLogger, StderrLogger};

pub use providers::{
    Backend, BackendId, BackendRegistry, ChatClient, ChatCompletion, CompletionOptions,
    HttpChatClient, MockChatClient, ProviderError, ProviderResult,
};

pub use catalog::{
    ToolDef, TOOL_CHAT_CONVERSATION, TOOL_GENERATE_TEXT, TOOL_LIST_MODELS,
};

pub use dispatch::Dispatcher;
