//! OpenAI-compatible chat-completion adapter
//!
//! Used only by the LLM extraction strategy.

pub mod client;
pub mod models;

pub use client::{build_prompt, OpenAiClient};
pub use models::{AddOns, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, LlmExtraction};
