//! End-to-end order pipeline
//!
//! load note → extract → build payload → send (skipped in dry-run mode).
//! One note per run, one request at a time.

use super::extract::{extractor_from_config, OrderExtractor};
use super::note::NoteSource;
use super::payload::build_payload;
use crate::adapters::intake::{DeliveryOutcome, IntakeClient};
use crate::config::SignalBoosterConfig;
use crate::domain::{NoteOrigin, OrderPayload, Result};
use crate::log_stage;

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Where the processed note came from
    pub note_origin: NoteOrigin,
    /// Payload that was built (and sent, unless dry-run)
    pub payload: OrderPayload,
    /// Delivery result; `None` in dry-run mode
    pub delivery: Option<DeliveryOutcome>,
}

impl RunReport {
    /// True unless the intake API rejected the payload
    pub fn is_clean(&self) -> bool {
        self.delivery
            .as_ref()
            .map_or(true, DeliveryOutcome::is_delivered)
    }
}

/// Sequences note loading, extraction, payload building and delivery
pub struct Pipeline {
    extractor: Box<dyn OrderExtractor>,
    intake: IntakeClient,
    dry_run: bool,
}

impl Pipeline {
    pub fn new(extractor: Box<dyn OrderExtractor>, intake: IntakeClient, dry_run: bool) -> Self {
        Self {
            extractor,
            intake,
            dry_run,
        }
    }

    /// Build a pipeline from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured extractor cannot be created.
    pub fn from_config(config: &SignalBoosterConfig) -> Result<Self> {
        Ok(Self::new(
            extractor_from_config(config)?,
            IntakeClient::new(config.intake.clone()),
            config.application.dry_run,
        ))
    }

    /// Process one note end to end
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal failures: transport errors reaching
    /// the intake API or payload serialization. A rejected delivery is
    /// reported in the [`RunReport`].
    pub async fn run(&self, source: &NoteSource) -> Result<RunReport> {
        log_stage!("load", "Loading physician note");
        let note = source.load();

        log_stage!("extract", "Extracting device and order details");
        let extraction = self.extractor.extract(&note).await?;
        tracing::info!(
            extractor = self.extractor.name(),
            device = %extraction.device,
            "Device detected"
        );

        log_stage!("build", "Building payload");
        let payload = build_payload(&extraction);

        let delivery = if self.dry_run {
            tracing::info!(url = %self.intake.url(), "Dry run: payload not sent");
            None
        } else {
            log_stage!("send", "Sending payload to API");
            Some(self.intake.send(&payload).await?)
        };

        match &delivery {
            Some(DeliveryOutcome::Rejected { status, reason }) => tracing::warn!(
                status = *status,
                reason = %reason,
                "Process completed, intake API rejected the payload"
            ),
            _ => tracing::info!("Process completed successfully"),
        }

        Ok(RunReport {
            note_origin: note.origin().clone(),
            payload,
            delivery,
        })
    }
}
