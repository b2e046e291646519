//! Chat-completion wire models
//!
//! These types mirror the subset of the chat-completion API the tool uses,
//! plus the JSON object the model is asked to produce.

use crate::domain::{DeviceType, Extraction, ExtractionResult, UNKNOWN_PROVIDER};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat-completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Add-ons as produced by a model: a single name or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AddOns {
    One(String),
    Many(Vec<String>),
}

impl AddOns {
    fn first(self) -> Option<String> {
        match self {
            AddOns::One(name) => Some(name),
            AddOns::Many(names) => names.into_iter().find(|name| !name.trim().is_empty()),
        }
    }
}

/// Field set the model is prompted to return
///
/// Every field is optional because model output is not trusted to be
/// complete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmExtraction {
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub mask_type: Option<String>,
    #[serde(default)]
    pub add_ons: Option<AddOns>,
    #[serde(default)]
    pub qualifier: Option<String>,
    #[serde(default)]
    pub ordering_provider: Option<String>,
    #[serde(default)]
    pub liters: Option<Value>,
    #[serde(default)]
    pub usage: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn liters_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => non_empty(Some(text)),
        Value::Number(number) => Some(format!("{number} L")),
        _ => None,
    }
}

impl LlmExtraction {
    /// Map model output onto the domain extraction
    ///
    /// Unrecognised device names become `Unknown`; a missing qualifier is
    /// empty and a missing provider is `"Unknown"`, matching the rules.
    pub fn into_extraction(self) -> Extraction {
        let device = self
            .device
            .as_deref()
            .map(|name| name.parse().unwrap_or(DeviceType::Unknown))
            .unwrap_or(DeviceType::Unknown);

        Extraction::new(
            device,
            ExtractionResult {
                mask_type: non_empty(self.mask_type),
                add_on: self.add_ons.and_then(AddOns::first),
                qualifier: self.qualifier.unwrap_or_default(),
                provider_name: non_empty(self.ordering_provider)
                    .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
                liters: liters_text(self.liters),
                usage: non_empty(self.usage),
            },
        )
    }
}
