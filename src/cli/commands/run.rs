//! Run command implementation
//!
//! Processes one physician note end to end.

use crate::config::{ExtractionStrategy, SignalBoosterConfig};
use crate::core::note::NoteSource;
use crate::core::Pipeline;
use crate::domain::Result;
use anyhow::Context;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Physician note file (overrides note.path)
    #[arg(long, value_name = "PATH")]
    pub note_file: Option<String>,

    /// Inline note: raw text, {"note": "..."} JSON, or "-" for stdin
    #[arg(long, value_name = "TEXT")]
    pub note: Option<String>,

    /// Override the intake API URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the extraction strategy (rules or llm)
    #[arg(long, value_name = "STRATEGY")]
    pub extractor: Option<ExtractionStrategy>,

    /// Build and print the payload without sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Apply CLI overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut SignalBoosterConfig) {
        if let Some(path) = &self.note_file {
            tracing::info!(path = %path, "Overriding note path from CLI");
            config.note.path = path.clone();
        }
        if let Some(url) = &self.api_url {
            tracing::info!(url = %url, "Overriding intake URL from CLI");
            config.intake.url = url.clone();
        }
        if let Some(strategy) = self.extractor {
            tracing::info!(strategy = %strategy, "Overriding extraction strategy from CLI");
            config.extraction.strategy = strategy;
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }

    /// Execute the run command
    pub async fn execute(&self, config: Result<SignalBoosterConfig>) -> anyhow::Result<i32> {
        tracing::info!("Starting Signal Booster run");

        let mut config = config.context("Failed to load configuration")?;
        self.apply_overrides(&mut config);
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Configuration validation failed: {e}"))?;

        let source = NoteSource::from_args(self.note.as_deref(), &config.note.path);
        let pipeline = Pipeline::from_config(&config)?;
        let report = pipeline.run(&source).await?;

        if report.delivery.is_none() {
            println!("{}", serde_json::to_string_pretty(&report.payload)?);
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RunArgs,
    }

    #[test]
    fn test_parse_run_args() {
        let cli = TestCli::parse_from([
            "test",
            "--note",
            "-",
            "--api-url",
            "http://localhost:9000/DrExtract",
            "--extractor",
            "llm",
            "--dry-run",
        ]);
        assert_eq!(cli.args.note.as_deref(), Some("-"));
        assert_eq!(cli.args.extractor, Some(ExtractionStrategy::Llm));
        assert!(cli.args.dry_run);
    }

    #[test]
    fn test_apply_overrides() {
        let args = RunArgs {
            note_file: Some("notes/a.txt".to_string()),
            api_url: Some("http://localhost:9000/DrExtract".to_string()),
            dry_run: true,
            ..Default::default()
        };
        let mut config = SignalBoosterConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.note.path, "notes/a.txt");
        assert_eq!(config.intake.url, "http://localhost:9000/DrExtract");
        assert_eq!(config.extraction.strategy, ExtractionStrategy::Rules);
        assert!(config.application.dry_run);
    }

    #[tokio::test]
    async fn test_execute_invalid_override_fails() {
        let args = RunArgs {
            api_url: Some("not a url".to_string()),
            dry_run: true,
            ..Default::default()
        };
        let result = args.execute(Ok(SignalBoosterConfig::default())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_dry_run_succeeds() {
        let args = RunArgs {
            note: Some(r#"{"note": "Needs a wheelchair. Dr. Ames"}"#.to_string()),
            dry_run: true,
            ..Default::default()
        };
        let code = args.execute(Ok(SignalBoosterConfig::default())).await.unwrap();
        assert_eq!(code, 0);
    }
}
