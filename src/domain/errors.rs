//! Domain error types
//!
//! This module defines the error hierarchy for Signal Booster.
//! Only genuine environment and transport failures are errors; a field that
//! cannot be found in a note is never represented here.

use thiserror::Error;

/// Main Signal Booster error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum SignalBoosterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Intake API delivery errors
    #[error("Intake API error: {0}")]
    Intake(#[from] IntakeError),

    /// LLM extraction errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Intake API errors
///
/// Non-2xx responses are not errors; they are reported as a rejected
/// delivery. Only failures to complete the exchange end up here.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Request never produced a response (DNS, refused connection, timeout)
    #[error("Transport failure posting to {url}: {message}")]
    Transport { url: String, message: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// LLM collaborator errors
///
/// These never abort a run: the LLM extractor logs them and falls back to
/// the rule-based extractor.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Failed to reach the completion endpoint
    #[error("Failed to reach completion endpoint: {0}")]
    ConnectionFailed(String),

    /// Endpoint answered with a non-success status
    #[error("Completion endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response did not contain a completion
    #[error("Empty completion in response")]
    EmptyCompletion,

    /// Completion text was not the expected JSON object
    #[error("Invalid completion format: {0}")]
    InvalidFormat(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SignalBoosterError {
    fn from(err: std::io::Error) -> Self {
        SignalBoosterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SignalBoosterError {
    fn from(err: serde_json::Error) -> Self {
        SignalBoosterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SignalBoosterError {
    fn from(err: toml::de::Error) -> Self {
        SignalBoosterError::Configuration(format!("TOML parse error: {err}"))
    }
}
