//! Rule-based field extraction
//!
//! Fixed, case-insensitive substring and regex predicates over note text.
//! None of these functions fail: a miss is an absent value, `"Unknown"`, or
//! an empty string depending on the field.

use super::OrderExtractor;
use crate::domain::{
    ClinicalNote, DeviceType, Extraction, ExtractionResult, Result, UNKNOWN_PROVIDER,
};
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

const QUALIFIER: &str = "AHI > 20";
const PROVIDER_TOKEN: &str = "Dr.";
const ORDERED_BY: &str = "Ordered by ";

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn liters_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+(?:\.\d+)?) ?L").expect("liters pattern is valid"))
}

/// Classify the ordered device
///
/// Checks run in fixed priority order and the first hit wins:
/// CPAP, then oxygen, then wheelchair.
pub fn detect_device_type(note: &str) -> DeviceType {
    let lowered = note.to_lowercase();
    if lowered.contains("cpap") {
        DeviceType::Cpap
    } else if lowered.contains("oxygen") {
        DeviceType::OxygenTank
    } else if lowered.contains("wheelchair") {
        DeviceType::Wheelchair
    } else {
        DeviceType::Unknown
    }
}

/// CPAP mask type. Only meaningful for CPAP notes.
pub fn detect_mask_type(note: &str) -> Option<String> {
    contains_ignore_case(note, "full face").then(|| "full face".to_string())
}

pub fn detect_add_on(note: &str) -> Option<String> {
    contains_ignore_case(note, "humidifier").then(|| "humidifier".to_string())
}

/// Qualifying diagnosis. Case-sensitive; empty string on a miss.
pub fn detect_qualifier(note: &str) -> String {
    if note.contains(QUALIFIER) {
        QUALIFIER.to_string()
    } else {
        String::new()
    }
}

/// Ordering physician
///
/// Takes the text from the first `Dr.` to the end of the note, removes every
/// `Ordered by ` phrase in it, and trims trailing periods and whitespace.
pub fn detect_provider(note: &str) -> String {
    let Some(index) = note.find(PROVIDER_TOKEN) else {
        return UNKNOWN_PROVIDER.to_string();
    };

    let tail = note[index..].replace(ORDERED_BY, "");
    tail.trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_start()
        .to_string()
}

/// Oxygen flow rate and usage context. Only meaningful for oxygen notes.
///
/// The two values are detected independently.
pub fn detect_oxygen_details(note: &str) -> (Option<String>, Option<String>) {
    let liters = liters_pattern()
        .captures(note)
        .and_then(|caps| caps.get(1))
        .map(|m| format!("{} L", m.as_str()));

    let sleep = contains_ignore_case(note, "sleep");
    let exertion = contains_ignore_case(note, "exertion");
    let usage = match (sleep, exertion) {
        (true, true) => Some("sleep and exertion".to_string()),
        (true, false) => Some("sleep".to_string()),
        (false, true) => Some("exertion".to_string()),
        (false, false) => None,
    };

    (liters, usage)
}

/// Run every detector with device-specific branching
///
/// Mask type is only looked for on CPAP notes and oxygen details only on
/// oxygen notes.
pub fn extract(note: &str) -> Extraction {
    let device = detect_device_type(note);

    let mask_type = match device {
        DeviceType::Cpap => detect_mask_type(note),
        _ => None,
    };

    let (liters, usage) = match device {
        DeviceType::OxygenTank => detect_oxygen_details(note),
        _ => (None, None),
    };

    Extraction::new(
        device,
        ExtractionResult {
            mask_type,
            add_on: detect_add_on(note),
            qualifier: detect_qualifier(note),
            provider_name: detect_provider(note),
            liters,
            usage,
        },
    )
}

/// Extractor backed by the fixed rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleExtractor;

#[async_trait]
impl OrderExtractor for RuleExtractor {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn extract(&self, note: &ClinicalNote) -> Result<Extraction> {
        let extraction = extract(note.text());
        tracing::debug!(
            device = %extraction.device,
            provider = %extraction.fields.provider_name,
            "Rule-based extraction complete"
        );
        Ok(extraction)
    }
}
