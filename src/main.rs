// Signal Booster - DME order extraction from physician notes
// Copyright (c) 2025 Signal Booster Contributors
// Licensed under the MIT License

use clap::Parser;
use signal_booster::cli::{Cli, Commands};
use signal_booster::config::{load_config_or_default, LoggingConfig};
use signal_booster::log_error_with_context;
use signal_booster::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Config errors are reported by the command itself; logging falls back
    // to console-only defaults so that report is still visible
    let config = load_config_or_default(&cli.config);
    let (config_level, logging_config) = match &config {
        Ok(c) => (c.application.log_level.clone(), c.logging.clone()),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_level);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Signal Booster - DME order extraction"
    );

    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(&e, "Signal Booster run aborted");
            eprintln!("Fatal error: {e:#}");
            1
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    config: signal_booster::domain::Result<signal_booster::config::SignalBoosterConfig>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config, config).await,
        Commands::Init(args) => args.execute().await,
    }
}
