//! Static tool catalog
//!
//! Declarative description of the callable operations, consumed verbatim
//! by the transport's discovery query. The schemas advertise bounds and
//! defaults but are advisory: dispatch re-validates only the required
//! fields, and numeric bounds are not enforced.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::providers::BackendId;

/// Tool name: single-prompt text generation
pub const TOOL_GENERATE_TEXT: &str = "generate_text";

/// Tool name: multi-turn conversation
pub const TOOL_CHAT_CONVERSATION: &str = "chat_conversation";

/// Tool name: enumerate configured backends and their models
pub const TOOL_LIST_MODELS: &str = "list_models";

/// One callable operation exposed over the protocol
#[derive(Debug, Clone)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

static TOOLS: Lazy<Vec<ToolDef>> = Lazy::new(|| {
    let provider_ids: Vec<&str> = BackendId::ALL.iter().map(BackendId::as_str).collect();

    vec![
        ToolDef {
            name: TOOL_GENERATE_TEXT,
            description: "Generate text from a prompt using a configured LLM backend",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "prompt": {
                        "type": "string",
                        "description": "The prompt to generate text from"
                    },
                    "provider": {
                        "type": "string",
                        "enum": provider_ids,
                        "description": "Preferred backend; falls back to the first configured backend if absent or unavailable"
                    },
                    "model": {
                        "type": "string",
                        "description": "Model identifier, passed to the backend verbatim; defaults to the backend's default model"
                    },
                    "max_tokens": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 1024,
                        "description": "Maximum tokens to generate"
                    },
                    "temperature": {
                        "type": "number",
                        "minimum": 0.0,
                        "maximum": 2.0,
                        "default": 0.7,
                        "description": "Sampling temperature"
                    }
                },
                "required": ["prompt"]
            }),
        },
        ToolDef {
            name: TOOL_CHAT_CONVERSATION,
            description: "Continue a multi-turn conversation using a configured LLM backend",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "messages": {
                        "type": "array",
                        "description": "Conversation so far, oldest first",
                        "items": {
                            "type": "object",
                            "properties": {
                                "role": {
                                    "type": "string",
                                    "enum": ["system", "user", "assistant"]
                                },
                                "content": {
                                    "type": "string"
                                }
                            },
                            "required": ["role", "content"]
                        }
                    },
                    "provider": {
                        "type": "string",
                        "enum": provider_ids,
                        "description": "Preferred backend; falls back to the first configured backend if absent or unavailable"
                    },
                    "model": {
                        "type": "string",
                        "description": "Model identifier, passed to the backend verbatim; defaults to the backend's default model"
                    },
                    "max_tokens": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 1024,
                        "description": "Maximum tokens to generate"
                    },
                    "temperature": {
                        "type": "number",
                        "minimum": 0.0,
                        "maximum": 2.0,
                        "default": 0.7,
                        "description": "Sampling temperature"
                    }
                },
                "required": ["messages"]
            }),
        },
        ToolDef {
            name: TOOL_LIST_MODELS,
            description: "List the configured backends and the models each one supports",
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
});

/// The full catalog, built once
pub fn tools() -> &'static [ToolDef] {
    &TOOLS
}
