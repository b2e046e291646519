//! DME intake API adapter

pub mod client;

pub use client::{DeliveryOutcome, IntakeClient};
