//! Extraction results and the outbound order payload

use super::device::DeviceType;
use serde::Serialize;

/// Provider name used when no ordering physician is found
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// Fields pulled from a note
///
/// `qualifier` and `provider_name` are always present; the remaining fields
/// are only set when corroborating text was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub mask_type: Option<String>,
    pub add_on: Option<String>,
    pub qualifier: String,
    pub provider_name: String,
    pub liters: Option<String>,
    pub usage: Option<String>,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            mask_type: None,
            add_on: None,
            qualifier: String::new(),
            provider_name: UNKNOWN_PROVIDER.to_string(),
            liters: None,
            usage: None,
        }
    }
}

/// Device classification together with its extracted fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub device: DeviceType,
    pub fields: ExtractionResult,
}

impl Extraction {
    pub fn new(device: DeviceType, fields: ExtractionResult) -> Self {
        Self { device, fields }
    }
}

/// Oxygen-only payload fields
///
/// Serialized with explicit nulls: the intake API expects both keys on every
/// oxygen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OxygenFields {
    pub liters: Option<String>,
    pub usage: Option<String>,
}

/// Order record sent to the intake API
///
/// Field order here is the serialized key order. A `None` oxygen block
/// contributes no keys at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    pub device: DeviceType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<String>>,

    pub qualifier: String,

    pub ordering_provider: String,

    #[serde(flatten)]
    pub oxygen: Option<OxygenFields>,
}

impl OrderPayload {
    /// Serialize to compact JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
