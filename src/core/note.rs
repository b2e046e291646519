//! Physician note loading
//!
//! Loading never fails: unreadable sources fall back to the default note and
//! malformed inline JSON is treated as raw text. Every fallback is logged.

use crate::domain::{ClinicalNote, NoteOrigin};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where to obtain the note for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSource {
    /// Read a file; the default note is used if it is missing or unreadable
    File(PathBuf),
    /// Raw text or a `{"note": "..."}` wrapper
    Inline(String),
    /// Standard input, interpreted like inline input
    Stdin,
}

impl NoteSource {
    /// Build a source from CLI-style arguments
    ///
    /// An inline argument takes precedence over a file; `-` selects stdin.
    pub fn from_args(inline: Option<&str>, file: impl Into<PathBuf>) -> Self {
        match inline {
            Some("-") => NoteSource::Stdin,
            Some(text) => NoteSource::Inline(text.to_string()),
            None => NoteSource::File(file.into()),
        }
    }

    /// Load the note from this source
    pub fn load(&self) -> ClinicalNote {
        match self {
            NoteSource::File(path) => load_note_file(path),
            NoteSource::Inline(input) => load_note_inline(input),
            NoteSource::Stdin => load_note_reader(std::io::stdin().lock()),
        }
    }
}

/// Load a note from a file, falling back to the default note
///
/// # Example
///
/// ```no_run
/// use signal_booster::core::note::load_note_file;
///
/// let note = load_note_file("physician_note.txt");
/// println!("{}", note.text());
/// ```
pub fn load_note_file(path: impl AsRef<Path>) -> ClinicalNote {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Attempting to read physician note");

    if !path.exists() {
        tracing::info!(path = %path.display(), "Note file not found, using default note");
        return ClinicalNote::default_note();
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            let text = decode_note_bytes(bytes);
            tracing::info!(
                path = %path.display(),
                length = text.len(),
                "Physician note loaded successfully"
            );
            ClinicalNote::new(text, NoteOrigin::File(path.display().to_string()))
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Error reading physician note, using default note"
            );
            ClinicalNote::default_note()
        }
    }
}

/// Load a note from inline input
///
/// A JSON object with a string `note` field yields that field; any other
/// input, including invalid JSON, is taken verbatim as the note text.
pub fn load_note_inline(input: &str) -> ClinicalNote {
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => match map.get("note").and_then(Value::as_str) {
            Some(text) => {
                tracing::info!(length = text.len(), "Loaded note from JSON input");
                ClinicalNote::new(text, NoteOrigin::Inline)
            }
            None => {
                tracing::warn!("JSON input has no string 'note' field, treating input as raw text");
                ClinicalNote::new(input, NoteOrigin::Inline)
            }
        },
        Ok(_) => {
            tracing::debug!("Inline input is not a JSON object, treating as raw text");
            ClinicalNote::new(input, NoteOrigin::Inline)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Inline input is not JSON, treating as raw text");
            ClinicalNote::new(input, NoteOrigin::Inline)
        }
    }
}

/// Load a note from a reader, interpreted like inline input
pub fn load_note_reader(mut reader: impl Read) -> ClinicalNote {
    let mut bytes = Vec::new();
    match reader.read_to_end(&mut bytes) {
        Ok(_) => load_note_inline(&decode_note_bytes(bytes)),
        Err(e) => {
            tracing::error!(error = %e, "Error reading note input, using default note");
            ClinicalNote::default_note()
        }
    }
}

/// Decode note bytes, replacing invalid UTF-8 sequences with U+FFFD
fn decode_note_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "Note contains invalid UTF-8, replacing undecodable bytes"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
