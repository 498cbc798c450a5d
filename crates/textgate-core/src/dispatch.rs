//! Tool dispatch
//!
//! Resolves and executes one tool call, producing exactly one
//! `ToolResponse` and never raising outward. Every failure mode - unknown
//! tool, invalid input, no configured backend, upstream error - is rendered
//! into the response text; the protocol-level error channel is reserved for
//! transport faults this layer does not generate.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::catalog::{TOOL_CHAT_CONVERSATION, TOOL_GENERATE_TEXT, TOOL_LIST_MODELS};
use crate::logging::SharedLogger;
use crate::providers::{BackendId, BackendRegistry, CompletionOptions};
use crate::types::{ChatMessage, GenerationParams, MessageRole, ToolResponse};

const PROMPT_REQUIRED: &str = "Prompt is required";
const MESSAGES_REQUIRED: &str = "Messages array is required";
const NO_RESPONSE: &str = "No response generated";
const FALLBACK_GENERATE: &str = "Failed to generate text";
const FALLBACK_CHAT: &str = "Failed to process chat";

/// Routes tool calls across the configured backends
///
/// Holds no mutable state; concurrent calls are independent and the shared
/// registry is read-only after construction.
pub struct Dispatcher {
    registry: Arc<BackendRegistry>,
    logger: SharedLogger,
}

impl Dispatcher {
    /// Create a dispatcher over an already-built registry
    pub fn new(registry: Arc<BackendRegistry>, logger: SharedLogger) -> Self {
        Self { registry, logger }
    }

    /// Resolve and execute one tool call
    ///
    /// An unrecognized tool name is a normal, successful outcome - the
    /// response text says so and no backend is contacted.
    pub async fn handle_tool_call(
        &self,
        tool: &str,
        args: &Map<String, Value>,
    ) -> ToolResponse {
        match tool {
            TOOL_GENERATE_TEXT => self.generate_text(args).await,
            TOOL_CHAT_CONVERSATION => self.chat_conversation(args).await,
            TOOL_LIST_MODELS => self.list_models(),
            other => {
                self.logger.warn(&format!("unknown tool requested: {other}"));
                ToolResponse::new(format!("Unknown tool: {other}"))
            }
        }
    }

    async fn generate_text(&self, args: &Map<String, Value>) -> ToolResponse {
        let prompt = args.get("prompt").and_then(Value::as_str).unwrap_or("");
        if prompt.is_empty() {
            return ToolResponse::new(PROMPT_REQUIRED);
        }

        let messages = vec![ChatMessage::user(prompt)];
        self.complete(args, messages, FALLBACK_GENERATE).await
    }

    async fn chat_conversation(&self, args: &Map<String, Value>) -> ToolResponse {
        let Some(messages) = parse_messages(args.get("messages")) else {
            return ToolResponse::new(MESSAGES_REQUIRED);
        };

        self.complete(args, messages, FALLBACK_CHAT).await
    }

    /// Shared provider-resolution and invocation path for the generation tools
    async fn complete(
        &self,
        args: &Map<String, Value>,
        messages: Vec<ChatMessage>,
        fallback: &str,
    ) -> ToolResponse {
        let available = self.registry.available();
        if available.is_empty() {
            return ToolResponse::new(no_backends_message());
        }

        let params = GenerationParams::from_args(args);

        // Requested backend wins only if it is configured; otherwise the
        // first available backend (priority order) handles the call.
        let provider = params
            .provider
            .filter(|p| available.contains(p))
            .unwrap_or(available[0]);
        let Some(backend) = self.registry.get(provider) else {
            return ToolResponse::new(no_backends_message());
        };

        // A requested model is passed verbatim; an invalid one is the
        // backend's failure to report, not ours.
        let model = params
            .model
            .clone()
            .unwrap_or_else(|| backend.default_model().to_string());
        let options = CompletionOptions {
            max_tokens: params.max_tokens(),
            temperature: params.temperature(),
        };

        self.logger.info(&format!(
            "dispatching to provider={provider} model={model} messages={}",
            messages.len()
        ));

        match backend.client().chat_completion(&model, &messages, options).await {
            Ok(completion) => {
                ToolResponse::new(completion.first_text().unwrap_or(NO_RESPONSE).to_string())
            }
            Err(err) => {
                self.logger.error(&format!("provider {provider} call failed: {err}"));
                ToolResponse::new(err.user_message(provider, fallback))
            }
        }
    }

    fn list_models(&self) -> ToolResponse {
        let available = self.registry.available();
        if available.is_empty() {
            return ToolResponse::new(no_backends_message());
        }

        let mut out = String::from("Available models:\n");
        for id in available {
            out.push_str(&format!("\n{id}:\n"));
            let Some(backend) = self.registry.get(id) else {
                continue;
            };
            for model in backend.models() {
                if model == backend.default_model() {
                    out.push_str(&format!("  {model} (default)\n"));
                } else {
                    out.push_str(&format!("  {model}\n"));
                }
            }
        }
        ToolResponse::new(out)
    }
}

/// Parse the `messages` argument into well-formed role/content pairs
///
/// Returns `None` when the value is missing, not an array, empty, or
/// contains an element without a valid role and string content - all of
/// which are input validation failures.
fn parse_messages(value: Option<&Value>) -> Option<Vec<ChatMessage>> {
    let array = value?.as_array()?;
    if array.is_empty() {
        return None;
    }

    let mut messages = Vec::with_capacity(array.len());
    for entry in array {
        let role = MessageRole::parse(entry.get("role")?.as_str()?)?;
        let content = entry.get("content")?.as_str()?;
        messages.push(ChatMessage {
            role,
            content: content.to_string(),
        });
    }
    Some(messages)
}

/// The single "nothing is configured" message, shared by all three tools
fn no_backends_message() -> String {
    let slots: Vec<String> = BackendId::ALL
        .iter()
        .map(|id| format!("{} ({})", id.env_var(), id))
        .collect();
    format!(
        "No text-generation backends are configured. Set one of: {}.",
        slots.join(", ")
    )
}
