//! Chat-completion client used by the LLM extractor

use super::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, LlmExtraction};
use crate::adapters::response_body;
use crate::config::LlmConfig;
use crate::domain::{LlmError, Result, SignalBoosterError};
use reqwest::Client;
use secrecy::ExposeSecret;

const SYSTEM_PROMPT: &str = "You are a medical data extraction assistant.";
const FIELD_LIST: &str = "device, mask_type, add_ons, qualifier, ordering_provider, liters, usage";

/// Build the user prompt for a note
pub fn build_prompt(note: &str) -> String {
    format!("Extract the following fields from this physician note as JSON: {FIELD_LIST}. Note: {note}")
}

/// Client for an OpenAI-compatible chat-completion endpoint
///
/// # Example
///
/// ```no_run
/// use signal_booster::adapters::openai::OpenAiClient;
/// use signal_booster::config::{secret_string, LlmConfig};
///
/// # async fn example() -> signal_booster::domain::Result<()> {
/// let config = LlmConfig {
///     api_key: Some(secret_string("sk-...".to_string())),
///     ..Default::default()
/// };
/// let client = OpenAiClient::new(config)?;
/// if let Some(fields) = client.extract("Patient needs a CPAP.").await {
///     println!("{:?}", fields.device);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: LlmConfig,
}

impl OpenAiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set.
    pub fn new(config: LlmConfig) -> Result<Self> {
        match &config.api_key {
            Some(key) if !key.expose_secret().is_empty() => Ok(Self { config }),
            _ => Err(SignalBoosterError::Configuration(
                "LLM extraction requires llm.api_key".to_string(),
            )),
        }
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Ask the model for the order fields of a note
    ///
    /// Any failure is logged and yields `None`; callers fall back to the
    /// rule-based extractor.
    pub async fn extract(&self, note: &str) -> Option<LlmExtraction> {
        match self.request_extraction(note).await {
            Ok(extraction) => {
                tracing::info!(endpoint = %self.config.endpoint, "LLM extraction succeeded");
                Some(extraction)
            }
            Err(e) => {
                tracing::warn!(
                    endpoint = %self.config.endpoint,
                    error = %e,
                    "Error extracting DME info with LLM"
                );
                None
            }
        }
    }

    async fn request_extraction(&self, note: &str) -> std::result::Result<LlmExtraction, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str().to_string())
            .unwrap_or_default();

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(build_prompt(note))],
        };

        tracing::debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "Sending chat completion request"
        );

        // One client per request; nothing is pooled between runs
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| LlmError::ConnectionFailed(format!("failed to build HTTP client: {e}")))?;
        let response = client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response_body(response).await;
            return Err(LlmError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidFormat(format!("completion response: {e}")))?;

        let content = completion.first_content().ok_or(LlmError::EmptyCompletion)?;

        serde_json::from_str(content)
            .map_err(|e| LlmError::InvalidFormat(format!("completion is not a JSON object: {e}")))
    }
}
