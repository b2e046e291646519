//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Signal Booster using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Signal Booster - DME order extraction from physician notes
#[derive(Parser, Debug)]
#[command(name = "signal-booster")]
#[command(version, about, long_about = None)]
#[command(author = "Signal Booster Contributors")]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(
        short,
        long,
        default_value = "signal-booster.toml",
        env = "SIGNAL_BOOSTER_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIGNAL_BOOSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract an order from a physician note and send it to the intake API
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
