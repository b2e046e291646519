//! Init command implementation
//!
//! Writes a commented sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "signal-booster.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(1);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. For LLM extraction, set OPENAI_API_KEY in your environment or .env");
                println!("  3. Validate configuration: signal-booster validate-config");
                println!("  4. Try a dry run: signal-booster run --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, output = %self.output, "Failed to write configuration file");
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(1)
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Signal Booster Configuration File
# Every setting is optional; the values below are the defaults.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"
# Build the payload and print it instead of sending it
dry_run = false

[note]
# Physician note read when no inline note is given
path = "physician_note.txt"

[intake]
url = "https://alert-api.com/DrExtract"
# timeout_seconds = 30

[extraction]
# "rules" (pattern matching) or "llm" (chat completion with rules fallback)
strategy = "rules"

[llm]
endpoint = "https://api.openai.com/v1/chat/completions"
model = "gpt-3.5-turbo"
# Required when strategy = "llm"
# api_key = "${OPENAI_API_KEY}"

[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignalBoosterConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_is_valid() {
        let config: SignalBoosterConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.intake.url, "https://alert-api.com/DrExtract");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("signal-booster.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("signal-booster.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[intake]"));
    }
}
