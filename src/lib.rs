// Signal Booster - DME order extraction from physician notes
// Copyright (c) 2025 Signal Booster Contributors
// Licensed under the MIT License

//! # Signal Booster - DME order extraction
//!
//! Signal Booster reads a physician's free-text note, extracts durable medical
//! equipment (DME) order fields, and forwards them as a JSON payload to an
//! intake API.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Note loading, extraction, payload building, orchestration
//! - [`adapters`] - External integrations (intake API, chat-completion model)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signal_booster::config::load_config_or_default;
//! use signal_booster::core::note::NoteSource;
//! use signal_booster::core::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("signal-booster.toml")?;
//!     let pipeline = Pipeline::from_config(&config)?;
//!
//!     let report = pipeline.run(&NoteSource::File(config.note.path.clone().into())).await?;
//!     println!("Sent {} order", report.payload.device);
//!     Ok(())
//! }
//! ```
//!
//! ## Extraction Rules
//!
//! The rules are fixed, case-insensitive pattern checks. Device type is the
//! first of CPAP, oxygen, wheelchair mentioned; misses are absent values,
//! never errors:
//!
//! ```rust
//! use signal_booster::core::extract::rules;
//! use signal_booster::domain::DeviceType;
//!
//! let extraction = rules::extract("Requires oxygen 2 L during sleep. Ordered by Dr. Lee.");
//! assert_eq!(extraction.device, DeviceType::OxygenTank);
//! assert_eq!(extraction.fields.liters.as_deref(), Some("2 L"));
//! assert_eq!(extraction.fields.provider_name, "Dr. Lee");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
