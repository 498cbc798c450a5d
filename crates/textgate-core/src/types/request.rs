//! Request and response value objects for tool calls

use serde_json::{Map, Value};

use crate::providers::BackendId;

/// Default token budget for a generation request
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Tuning parameters shared by the two generation tools
///
/// All fields are optional on the wire; defaults are applied at dispatch
/// time. The advertised temperature bounds ([0.0, 2.0]) are advisory only:
/// an out-of-range value is passed through to the backend unchecked.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Preferred backend; honored only if that backend is configured
    pub provider: Option<BackendId>,
    /// Model identifier, passed to the backend verbatim
    pub model: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl GenerationParams {
    /// Extract the tuning fields from a tool-call argument map
    ///
    /// Lenient by design: a missing or ill-typed field falls back to its
    /// default, and an unknown provider name resolves to `None` so that
    /// dispatch falls through to the first available backend.
    pub fn from_args(args: &Map<String, Value>) -> Self {
        Self {
            provider: args
                .get("provider")
                .and_then(Value::as_str)
                .and_then(BackendId::parse),
            model: args
                .get("model")
                .and_then(Value::as_str)
                .map(str::to_string),
            max_tokens: args
                .get("max_tokens")
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok()),
            temperature: args
                .get("temperature")
                .and_then(Value::as_f64)
                .map(|v| v as f32),
        }
    }

    /// Token budget with the default applied
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Temperature with the default applied
    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }
}

/// The uniform result shape returned for every tool call
///
/// Always structurally valid: backend and validation failures are rendered
/// into `text`, never surfaced as protocol-level errors. Callers distinguish
/// success from failure by inspecting the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    /// Generated content, or a human-readable error description
    pub text: String,
}

impl ToolResponse {
    /// Create a response from rendered text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
