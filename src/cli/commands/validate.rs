//! Validate config command implementation

use crate::config::{ExtractionStrategy, SignalBoosterConfig};
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates, so this reports the load result and a
    /// summary of the effective settings.
    pub async fn execute(
        &self,
        config_path: &str,
        config: Result<SignalBoosterConfig>,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match config {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(1);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Note Path: {}", config.note.path);
        println!("  Intake URL: {}", config.intake.url);
        match config.intake.timeout_seconds {
            Some(seconds) => println!("  Intake Timeout: {seconds}s"),
            None => println!("  Intake Timeout: transport default"),
        }
        println!("  Extraction Strategy: {}", config.extraction.strategy);
        if config.extraction.strategy == ExtractionStrategy::Llm {
            println!("  LLM Endpoint: {}", config.llm.endpoint);
            println!("  LLM Model: {}", config.llm.model);
        }
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SignalBoosterError;

    #[tokio::test]
    async fn test_validate_valid_config() {
        let code = ValidateArgs {}
            .execute("signal-booster.toml", Ok(SignalBoosterConfig::default()))
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_invalid_config() {
        let err = SignalBoosterError::Configuration("bad".to_string());
        let code = ValidateArgs {}
            .execute("signal-booster.toml", Err(err))
            .await
            .unwrap();
        assert_eq!(code, 1);
    }
}
