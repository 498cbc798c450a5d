//! Core types shared across the crate

mod message;
mod request;

pub use message::{ChatMessage, MessageRole};
pub use request::{
    GenerationParams, ToolResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
