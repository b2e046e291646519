//! DME device classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Device type ordered in a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "CPAP")]
    Cpap,
    #[serde(rename = "Oxygen Tank")]
    OxygenTank,
    #[serde(rename = "Wheelchair")]
    Wheelchair,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl DeviceType {
    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Cpap => "CPAP",
            DeviceType::OxygenTank => "Oxygen Tank",
            DeviceType::Wheelchair => "Wheelchair",
            DeviceType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = std::convert::Infallible;

    /// Lenient parse used for externally produced device names.
    /// Anything unrecognised maps to `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "cpap" => DeviceType::Cpap,
            "oxygen tank" | "oxygen" => DeviceType::OxygenTank,
            "wheelchair" => DeviceType::Wheelchair,
            _ => DeviceType::Unknown,
        })
    }
}
