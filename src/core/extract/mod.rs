//! Order field extraction
//!
//! Two interchangeable extractors implement [`OrderExtractor`]:
//! - [`RuleExtractor`]: the fixed pattern-matching rules in [`rules`]
//! - [`LlmExtractor`]: a chat-completion model, falling back to the rules
//!   whenever the model yields nothing usable
//!
//! The active one is chosen from `extraction.strategy` by
//! [`extractor_from_config`].

pub mod llm;
pub mod rules;

pub use llm::LlmExtractor;
pub use rules::RuleExtractor;

use crate::adapters::openai::OpenAiClient;
use crate::config::{ExtractionStrategy, SignalBoosterConfig};
use crate::domain::{ClinicalNote, Extraction, Result};
use async_trait::async_trait;

/// Maps a clinical note to a device classification and its fields
#[async_trait]
pub trait OrderExtractor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Extract order fields from a note
    async fn extract(&self, note: &ClinicalNote) -> Result<Extraction>;
}

/// Create the extractor selected by configuration
///
/// # Errors
///
/// Returns an error if the LLM strategy is selected without usable LLM
/// settings.
pub fn extractor_from_config(config: &SignalBoosterConfig) -> Result<Box<dyn OrderExtractor>> {
    let extractor: Box<dyn OrderExtractor> = match config.extraction.strategy {
        ExtractionStrategy::Rules => Box::new(RuleExtractor),
        ExtractionStrategy::Llm => {
            let client = OpenAiClient::new(config.llm.clone())?;
            Box::new(LlmExtractor::new(client))
        }
    };

    tracing::debug!(extractor = extractor.name(), "Selected extractor");
    Ok(extractor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::SignalBoosterError;

    #[test]
    fn test_default_config_selects_rules() {
        let extractor = extractor_from_config(&SignalBoosterConfig::default()).unwrap();
        assert_eq!(extractor.name(), "rules");
    }

    #[test]
    fn test_llm_strategy_selects_llm() {
        let mut config = SignalBoosterConfig::default();
        config.extraction.strategy = ExtractionStrategy::Llm;
        config.llm.api_key = Some(secret_string("sk-test".to_string()));

        let extractor = extractor_from_config(&config).unwrap();
        assert_eq!(extractor.name(), "llm");
    }

    #[test]
    fn test_llm_strategy_without_key_fails() {
        let mut config = SignalBoosterConfig::default();
        config.extraction.strategy = ExtractionStrategy::Llm;

        let result = extractor_from_config(&config);
        assert!(matches!(result, Err(SignalBoosterError::Configuration(_))));
    }
}
