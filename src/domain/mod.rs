//! Domain models and types for Signal Booster.
//!
//! The domain layer provides:
//! - **Note model** ([`ClinicalNote`], [`NoteOrigin`])
//! - **Device classification** ([`DeviceType`])
//! - **Extraction and payload records** ([`ExtractionResult`], [`Extraction`], [`OrderPayload`])
//! - **Error types** ([`SignalBoosterError`], [`IntakeError`], [`LlmError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SignalBoosterError>`]. A field
//! missing from a note is not an error; it is an absent value.
//!
//! ```rust
//! use signal_booster::domain::{Result, SignalBoosterError};
//!
//! fn example() -> Result<()> {
//!     let config = signal_booster::config::load_config_or_default("signal-booster.toml")?;
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod errors;
pub mod note;
pub mod order;
pub mod result;

// Re-export commonly used types for convenience
pub use device::DeviceType;
pub use errors::{IntakeError, LlmError, SignalBoosterError};
pub use note::{ClinicalNote, NoteOrigin, DEFAULT_NOTE};
pub use order::{Extraction, ExtractionResult, OrderPayload, OxygenFields, UNKNOWN_PROVIDER};
pub use result::Result;
