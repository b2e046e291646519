//! Clinical note model

use std::fmt;

/// Note used when no readable note can be obtained
pub const DEFAULT_NOTE: &str =
    "Patient needs a CPAP with full face mask and humidifier. AHI > 20. Ordered by Dr. Cameron.";

/// Where a note's text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOrigin {
    /// Read from a file on disk
    File(String),
    /// Supplied inline (raw text, JSON wrapper, or stdin)
    Inline,
    /// Hardcoded default note
    Default,
}

impl fmt::Display for NoteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteOrigin::File(path) => write!(f, "file:{path}"),
            NoteOrigin::Inline => write!(f, "inline"),
            NoteOrigin::Default => write!(f, "default"),
        }
    }
}

/// Immutable free-text physician note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalNote {
    text: String,
    origin: NoteOrigin,
}

impl ClinicalNote {
    /// Create a note from text and its origin
    pub fn new(text: impl Into<String>, origin: NoteOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    /// The hardcoded fallback note
    pub fn default_note() -> Self {
        Self::new(DEFAULT_NOTE, NoteOrigin::Default)
    }

    /// Note text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the text came from
    pub fn origin(&self) -> &NoteOrigin {
        &self.origin
    }

    /// Whether this is the hardcoded fallback note
    pub fn is_default(&self) -> bool {
        self.origin == NoteOrigin::Default
    }
}

impl AsRef<str> for ClinicalNote {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_note() {
        let note = ClinicalNote::default_note();
        assert!(note.is_default());
        assert_eq!(note.text(), DEFAULT_NOTE);
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(
            NoteOrigin::File("physician_note.txt".to_string()).to_string(),
            "file:physician_note.txt"
        );
        assert_eq!(NoteOrigin::Inline.to_string(), "inline");
    }
}
