//! LLM-backed extraction with rule-based fallback

use super::{rules, OrderExtractor};
use crate::adapters::openai::OpenAiClient;
use crate::domain::{ClinicalNote, Extraction, Result};
use async_trait::async_trait;

/// Extractor that asks a chat-completion model first
///
/// When the model yields nothing usable the fixed rules are used instead,
/// so this extractor never fails on model errors.
#[derive(Debug, Clone)]
pub struct LlmExtractor {
    client: OpenAiClient,
}

impl LlmExtractor {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderExtractor for LlmExtractor {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn extract(&self, note: &ClinicalNote) -> Result<Extraction> {
        match self.client.extract(note.text()).await {
            Some(llm) => {
                let extraction = llm.into_extraction();
                tracing::debug!(device = %extraction.device, "Using LLM extraction");
                Ok(extraction)
            }
            None => {
                tracing::warn!("LLM extraction unavailable, falling back to rule-based extraction");
                Ok(rules::extract(note.text()))
            }
        }
    }
}
