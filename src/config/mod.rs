//! Configuration management for Signal Booster.
//!
//! Signal Booster reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SIGNAL_BOOSTER_<SECTION>_<KEY>` environment overrides
//! - Defaults for every setting, so no file is required
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [note]
//! path = "physician_note.txt"
//!
//! [intake]
//! url = "https://alert-api.com/DrExtract"
//!
//! [extraction]
//! strategy = "llm"
//!
//! [llm]
//! api_key = "${OPENAI_API_KEY}"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use signal_booster::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("signal-booster.toml")?;
//! println!("Intake URL: {}", config.intake.url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, ExtractionConfig, ExtractionStrategy, IntakeConfig, LlmConfig,
    LoggingConfig, NoteConfig, SignalBoosterConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
