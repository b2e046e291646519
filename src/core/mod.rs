//! Core business logic
//!
//! - [`note`] - Note loading with default fallback
//! - [`extract`] - Rule-based and LLM extractors
//! - [`payload`] - Order payload assembly
//! - [`pipeline`] - End-to-end orchestration

pub mod extract;
pub mod note;
pub mod payload;
pub mod pipeline;

pub use pipeline::{Pipeline, RunReport};
