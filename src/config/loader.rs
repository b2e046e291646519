//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SignalBoosterConfig;
use crate::config::secret_string;
use crate::domain::errors::SignalBoosterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SIGNAL_BOOSTER";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SignalBoosterConfig
/// 4. Applies environment variable overrides (SIGNAL_BOOSTER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use signal_booster::config::loader::load_config;
///
/// let config = load_config("signal-booster.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SignalBoosterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SignalBoosterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SignalBoosterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;
    finish(config)
}

/// Loads configuration, using defaults when the file does not exist
///
/// The tool is expected to run without any configuration file, so a missing
/// file is not an error here. A file that exists but is invalid still is.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<SignalBoosterConfig> {
    let path = path.as_ref();

    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        config_path = %path.display(),
        "Configuration file not found, using defaults"
    );
    finish(SignalBoosterConfig::default())
}

/// Parses TOML text after environment variable substitution
fn parse_config(contents: &str) -> Result<SignalBoosterConfig> {
    let contents = substitute_env_vars(contents)?;

    toml::from_str(&contents)
        .map_err(|e| SignalBoosterError::Configuration(format!("Failed to parse TOML: {}", e)))
}

/// Applies overrides and validates
fn finish(mut config: SignalBoosterConfig) -> Result<SignalBoosterConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SignalBoosterError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SignalBoosterError::Configuration(e.to_string()))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Placeholders inside comments are left untouched
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(SignalBoosterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

/// Reads and parses a typed override; an unparsable value is an error
fn parse_env_override<T>(section: &str, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(val) = env_override(section, key) else {
        return Ok(None);
    };

    val.trim().parse().map(Some).map_err(|e| {
        let var = format!("{ENV_PREFIX}_{section}_{key}");
        tracing::error!(variable = %var, value = %val, error = %e, "Invalid environment override");
        SignalBoosterError::Configuration(format!("Invalid value '{val}' for {var}: {e}"))
    })
}

/// Applies environment variable overrides using SIGNAL_BOOSTER_* prefix
///
/// Environment variables follow the pattern: SIGNAL_BOOSTER_<SECTION>_<KEY>
/// For example: SIGNAL_BOOSTER_INTAKE_URL, SIGNAL_BOOSTER_EXTRACTION_STRATEGY
fn apply_env_overrides(config: &mut SignalBoosterConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = parse_env_override("APPLICATION", "DRY_RUN")? {
        config.application.dry_run = val;
    }

    // Note overrides
    if let Some(val) = env_override("NOTE", "PATH") {
        config.note.path = val;
    }

    // Intake overrides
    if let Some(val) = env_override("INTAKE", "URL") {
        config.intake.url = val;
    }
    if let Some(seconds) = parse_env_override("INTAKE", "TIMEOUT_SECONDS")? {
        config.intake.timeout_seconds = Some(seconds);
    }

    // Extraction overrides
    if let Some(strategy) = parse_env_override("EXTRACTION", "STRATEGY")? {
        config.extraction.strategy = strategy;
    }

    // LLM overrides
    if let Some(val) = env_override("LLM", "ENDPOINT") {
        config.llm.endpoint = val;
    }
    if let Some(val) = env_override("LLM", "MODEL") {
        config.llm.model = val;
    }
    if let Some(val) = env_override("LLM", "API_KEY") {
        config.llm.api_key = Some(secret_string(val));
    }

    // Logging overrides
    if let Some(val) = parse_env_override("LOGGING", "LOCAL_ENABLED")? {
        config.logging.local_enabled = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ExtractionStrategy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SB_LOADER_TEST_VAR", "test_value");
        let input = "api_key = \"${SB_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"");
        std::env::remove_var("SB_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SB_LOADER_MISSING_VAR");
        let input = "api_key = \"${SB_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("SB_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("SB_LOADER_COMMENTED_VAR");
        let input = "# api_key = \"${SB_LOADER_COMMENTED_VAR}\"\nmodel = \"gpt\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-signal-booster.toml");
        assert!(matches!(result, Err(SignalBoosterError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent-signal-booster.toml").unwrap();
        assert_eq!(config.note.path, "physician_note.txt");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[note]
path = "notes/today.txt"

[intake]
url = "http://localhost:9000/DrExtract"
timeout_seconds = 5

[extraction]
strategy = "rules"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.note.path, "notes/today.txt");
        assert_eq!(config.intake.url, "http://localhost:9000/DrExtract");
        assert_eq!(config.intake.timeout_seconds, Some(5));
        assert_eq!(config.extraction.strategy, ExtractionStrategy::Rules);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[intake]\nurl = \"nowhere\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
