//! Order payload assembly

use crate::domain::{DeviceType, Extraction, OrderPayload, OxygenFields};

/// Build the intake payload for an extraction
///
/// Fields that do not apply to the device are dropped even if an extractor
/// produced them: `mask_type` only for CPAP, `liters`/`usage` only for
/// oxygen. Oxygen orders always carry both oxygen keys, null when unknown.
///
/// # Example
///
/// ```
/// use signal_booster::core::{extract::rules, payload::build_payload};
///
/// let payload = build_payload(&rules::extract(signal_booster::domain::DEFAULT_NOTE));
/// assert_eq!(
///     payload.to_json().unwrap(),
///     r#"{"device":"CPAP","mask_type":"full face","add_ons":["humidifier"],"qualifier":"AHI > 20","ordering_provider":"Dr. Cameron"}"#
/// );
/// ```
pub fn build_payload(extraction: &Extraction) -> OrderPayload {
    let fields = &extraction.fields;

    let mask_type = match extraction.device {
        DeviceType::Cpap => fields.mask_type.clone(),
        _ => None,
    };

    let oxygen = match extraction.device {
        DeviceType::OxygenTank => Some(OxygenFields {
            liters: fields.liters.clone(),
            usage: fields.usage.clone(),
        }),
        _ => None,
    };

    let payload = OrderPayload {
        device: extraction.device,
        mask_type,
        add_ons: fields.add_on.clone().map(|add_on| vec![add_on]),
        qualifier: fields.qualifier.clone(),
        ordering_provider: fields.provider_name.clone(),
        oxygen,
    };

    tracing::debug!(device = %payload.device, "Payload built successfully");
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtractionResult;
    use serde_json::json;

    fn fields() -> ExtractionResult {
        ExtractionResult {
            mask_type: Some("full face".to_string()),
            add_on: Some("humidifier".to_string()),
            qualifier: "AHI > 20".to_string(),
            provider_name: "Dr. Cameron".to_string(),
            liters: Some("2 L".to_string()),
            usage: Some("sleep".to_string()),
        }
    }

    #[test]
    fn test_cpap_payload_drops_oxygen_fields() {
        let payload = build_payload(&Extraction::new(DeviceType::Cpap, fields()));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "device": "CPAP",
                "mask_type": "full face",
                "add_ons": ["humidifier"],
                "qualifier": "AHI > 20",
                "ordering_provider": "Dr. Cameron"
            })
        );
    }

    #[test]
    fn test_oxygen_payload_drops_mask_type() {
        let payload = build_payload(&Extraction::new(DeviceType::OxygenTank, fields()));
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("mask_type").is_none());
        assert_eq!(value["liters"], "2 L");
        assert_eq!(value["usage"], "sleep");
    }

    #[test]
    fn test_oxygen_payload_keeps_null_keys() {
        let extraction = Extraction::new(DeviceType::OxygenTank, ExtractionResult::default());
        let value = serde_json::to_value(build_payload(&extraction)).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("liters"));
        assert!(object.contains_key("usage"));
        assert!(object["liters"].is_null());
        assert!(object["usage"].is_null());
        assert!(!object.contains_key("add_ons"));
    }

    #[test]
    fn test_wheelchair_payload_minimal() {
        let result = ExtractionResult {
            provider_name: "Dr. Ames".to_string(),
            ..Default::default()
        };
        let value =
            serde_json::to_value(build_payload(&Extraction::new(DeviceType::Wheelchair, result)))
                .unwrap();

        assert_eq!(
            value,
            json!({"device": "Wheelchair", "qualifier": "", "ordering_provider": "Dr. Ames"})
        );
    }
}
