//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console logs on standard error
//! - Optional JSON file logs with rotation
//! - `RUST_LOG` override through `EnvFilter`
//!
//! # Example
//!
//! ```no_run
//! use signal_booster::logging::init_logging;
//! use signal_booster::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a pipeline stage transition
///
/// # Example
///
/// ```no_run
/// use signal_booster::log_stage;
///
/// log_stage!("extract", "Extracting device and order details");
/// ```
#[macro_export]
macro_rules! log_stage {
    ($stage:expr, $message:expr) => {
        tracing::info!(stage = $stage, "{}", $message);
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use signal_booster::log_error_with_context;
/// use signal_booster::domain::SignalBoosterError;
///
/// let error = SignalBoosterError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
