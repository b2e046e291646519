//! Configuration schema types
//!
//! Every section carries defaults so that a run without any configuration
//! file behaves like the stock tool.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Extraction strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// Fixed pattern-matching rules
    #[default]
    Rules,
    /// Chat-completion model, falling back to rules on failure
    Llm,
}

impl std::str::FromStr for ExtractionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rules" => Ok(ExtractionStrategy::Rules),
            "llm" => Ok(ExtractionStrategy::Llm),
            other => Err(format!(
                "Invalid extraction strategy '{other}'. Must be one of: rules, llm"
            )),
        }
    }
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStrategy::Rules => f.write_str("rules"),
            ExtractionStrategy::Llm => f.write_str("llm"),
        }
    }
}

/// Main Signal Booster configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignalBoosterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Note source settings
    #[serde(default)]
    pub note: NoteConfig,

    /// Intake API settings
    #[serde(default)]
    pub intake: IntakeConfig,

    /// Extraction strategy settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// LLM collaborator settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SignalBoosterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.note.validate()?;
        self.intake.validate()?;
        if self.extraction.strategy == ExtractionStrategy::Llm {
            self.llm.validate()?;
        }
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build the payload but don't send it)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Note source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Path of the physician note file
    #[serde(default = "default_note_path")]
    pub path: String,
}

impl NoteConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("note.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            path: default_note_path(),
        }
    }
}

/// Intake API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Endpoint receiving order payloads
    #[serde(default = "default_intake_url")]
    pub url: String,

    /// Request timeout; unset leaves the transport default in place
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl IntakeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("intake.url", &self.url)?;
        if self.timeout_seconds == Some(0) {
            return Err("intake.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            url: default_intake_url(),
            timeout_seconds: None,
        }
    }
}

/// Extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractionConfig {
    /// Which extractor to run
    #[serde(default)]
    pub strategy: ExtractionStrategy,
}

/// LLM collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Chat-completion endpoint
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Model name sent with each request
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API key (use `${OPENAI_API_KEY}` or SIGNAL_BOOSTER_LLM_API_KEY)
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

impl LlmConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("llm.endpoint", &self.endpoint)?;
        if self.model.trim().is_empty() {
            return Err("llm.model cannot be empty".to_string());
        }
        match &self.api_key {
            Some(key) if !key.expose_secret().is_empty() => Ok(()),
            _ => Err("llm.api_key is required when extraction.strategy = 'llm'".to_string()),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            api_key: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    let parsed = Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "{field} must use http or https, got scheme '{other}'"
        )),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_note_path() -> String {
    "physician_note.txt".to_string()
}

fn default_intake_url() -> String {
    "https://alert-api.com/DrExtract".to_string()
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_llm_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_default_values() {
        let config = SignalBoosterConfig::default();
        assert_eq!(config.application.log_level, "info");
        assert!(!config.application.dry_run);
        assert_eq!(config.note.path, "physician_note.txt");
        assert_eq!(config.intake.url, "https://alert-api.com/DrExtract");
        assert_eq!(config.intake.timeout_seconds, None);
        assert_eq!(config.extraction.strategy, ExtractionStrategy::Rules);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_intake_config_validation() {
        let mut config = IntakeConfig::default();
        assert!(config.validate().is_ok());

        config.url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.url = "ftp://alert-api.com/DrExtract".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("http or https"));

        config.url = default_intake_url();
        config.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_llm_strategy_requires_api_key() {
        let mut config = SignalBoosterConfig::default();
        config.extraction.strategy = ExtractionStrategy::Llm;
        let err = config.validate().unwrap_err();
        assert!(err.contains("api_key"));

        config.llm.api_key = Some(secret_string(String::new()));
        assert!(config.validate().is_err());

        config.llm.api_key = Some(secret_string("sk-test".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_llm_config_ignored_for_rules_strategy() {
        let mut config = SignalBoosterConfig::default();
        config.llm.endpoint = "not a url".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "LLM".parse::<ExtractionStrategy>().unwrap(),
            ExtractionStrategy::Llm
        );
        assert!("regex".parse::<ExtractionStrategy>().is_err());
    }
}
