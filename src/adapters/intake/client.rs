//! Intake API client
//!
//! Posts a single order payload to the intake endpoint. A non-2xx answer is
//! a rejected delivery, not an error; only transport failures are errors.

use crate::adapters::response_body;
use crate::config::IntakeConfig;
use crate::domain::{IntakeError, OrderPayload, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use std::fmt;
use std::time::Duration;

/// Result of a completed HTTP exchange with the intake API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// 2xx response
    Delivered { status: u16 },
    /// Any other status
    Rejected { status: u16, reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            DeliveryOutcome::Delivered { status } | DeliveryOutcome::Rejected { status, .. } => {
                *status
            }
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Delivered { status } => write!(f, "delivered ({status})"),
            DeliveryOutcome::Rejected { status, reason } => {
                write!(f, "rejected ({status} {reason})")
            }
        }
    }
}

/// Client for the DME intake endpoint
///
/// # Example
///
/// ```no_run
/// use signal_booster::adapters::intake::IntakeClient;
/// use signal_booster::config::IntakeConfig;
/// use signal_booster::core::{extract::rules, payload::build_payload};
///
/// # async fn example() -> signal_booster::domain::Result<()> {
/// let client = IntakeClient::new(IntakeConfig::default());
/// let payload = build_payload(&rules::extract("Needs a wheelchair. Dr. Ames"));
/// let outcome = client.send(&payload).await?;
/// println!("{outcome}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntakeClient {
    config: IntakeConfig,
}

impl IntakeClient {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    /// Endpoint payloads are posted to
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Build a fresh HTTP client for one request
    fn build_client(&self) -> Result<Client> {
        let mut builder = ClientBuilder::new().pool_max_idle_per_host(0);
        if let Some(seconds) = self.config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        builder
            .build()
            .map_err(|e| IntakeError::ClientBuild(e.to_string()).into())
    }

    /// Post the payload once
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Transport`] when no response was received.
    pub async fn send(&self, payload: &OrderPayload) -> Result<DeliveryOutcome> {
        let body = payload.to_json()?;
        let client = self.build_client()?;

        tracing::info!(url = %self.config.url, bytes = body.len(), "Sending payload to API");

        let response = client
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %self.config.url, error = %e, "Error sending payload to API");
                IntakeError::Transport {
                    url: self.config.url.clone(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Payload sent successfully");
            return Ok(DeliveryOutcome::Delivered {
                status: status.as_u16(),
            });
        }

        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let body = response_body(response).await;
        tracing::warn!(
            status = status.as_u16(),
            reason = %reason,
            body = %body,
            "API call failed"
        );

        Ok(DeliveryOutcome::Rejected {
            status: status.as_u16(),
            reason,
        })
    }
}
