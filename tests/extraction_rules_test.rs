//! Integration tests for the rule-based field extractor
//!
//! These cover the externally visible extraction properties: device
//! priority, fallbacks, and payload shape per device.

use signal_booster::core::extract::rules::{
    detect_device_type, detect_oxygen_details, detect_provider, detect_qualifier, extract,
};
use signal_booster::core::payload::build_payload;
use signal_booster::domain::{DeviceType, DEFAULT_NOTE};

#[test]
fn test_cpap_wins_in_any_casing() {
    let notes = [
        "CPAP with oxygen bleed-in and a wheelchair",
        "cpap, oxygen, wheelchair",
        "Patient needs a CpAp; currently on Oxygen.",
        "wheelchair user, requires cPAP",
    ];

    for note in notes {
        assert_eq!(detect_device_type(note), DeviceType::Cpap, "note: {note}");
    }
}

#[test]
fn test_unrelated_notes_are_unknown() {
    let notes = [
        "",
        "No device needed.",
        "Patient needs a walker and a hospital bed.",
        "Follow up in 3 months. Dr. Patel.",
    ];

    for note in notes {
        assert_eq!(detect_device_type(note), DeviceType::Unknown, "note: {note}");
    }
}

#[test]
fn test_qualifier_is_case_sensitive() {
    assert_eq!(detect_qualifier("Sleep study: AHI > 20."), "AHI > 20");
    assert_eq!(detect_qualifier("Sleep study: ahi > 20."), "");
}

#[test]
fn test_provider_extraction() {
    assert_eq!(
        detect_provider("Needs CPAP. Ordered by Dr. Cameron."),
        "Dr. Cameron"
    );
    assert_eq!(detect_provider("Needs CPAP, ordering physician pending."), "Unknown");
}

#[test]
fn test_oxygen_details_examples() {
    assert_eq!(
        detect_oxygen_details("2.5L sleep and exertion"),
        (
            Some("2.5 L".to_string()),
            Some("sleep and exertion".to_string())
        )
    );
    assert_eq!(
        detect_oxygen_details("Patient uses oxygen during exertion only"),
        (None, Some("exertion".to_string()))
    );
}

#[test]
fn test_cpap_payload_never_has_oxygen_keys() {
    let payload = build_payload(&extract(
        "CPAP nightly, 2L oxygen bleed during sleep and exertion. Dr. Ng.",
    ));
    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object["device"], "CPAP");
    assert!(!object.contains_key("liters"));
    assert!(!object.contains_key("usage"));
}

#[test]
fn test_oxygen_payload_always_has_oxygen_keys() {
    let payload = build_payload(&extract("Home oxygen as needed. Dr. Ames."));
    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object["device"], "Oxygen Tank");
    assert!(object.contains_key("liters"));
    assert!(object.contains_key("usage"));
    assert!(object["liters"].is_null());
    assert!(object["usage"].is_null());
    assert!(!object.contains_key("mask_type"));
}

#[test]
fn test_default_note_payload() {
    let payload = build_payload(&extract(DEFAULT_NOTE));
    assert_eq!(
        payload.to_json().unwrap(),
        r#"{"device":"CPAP","mask_type":"full face","add_ons":["humidifier"],"qualifier":"AHI > 20","ordering_provider":"Dr. Cameron"}"#
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let notes = [
        DEFAULT_NOTE,
        "Requires oxygen 3.5 L during sleep. Ordered by Dr. Lee.",
        "Needs a wheelchair and a humidifier?",
        "",
    ];

    for note in notes {
        let first = build_payload(&extract(note)).to_json().unwrap();
        let second = build_payload(&extract(note)).to_json().unwrap();
        assert_eq!(first, second, "note: {note}");
    }
}
