use launchkey_license::{LicensePayload, PayloadError};
use pretty_assertions::assert_eq;

fn sample() -> LicensePayload {
    LicensePayload {
        username: "alice".to_string(),
        machine_id_hash: "ab".repeat(32),
        expiry_timestamp: 1_767_225_600_000,
    }
}

#[test]
fn encode_uses_wire_field_names() {
    let json = sample().encode().unwrap();
    assert!(json.contains(r#""username":"alice""#));
    assert!(json.contains(r#""machineIdHash":"#));
    assert!(json.contains(r#""expiryTimestamp":1767225600000"#));
    // Rust-side names never leak onto the wire.
    assert!(!json.contains("machine_id_hash"));
    assert!(!json.contains("expiry_timestamp"));
}

#[test]
fn encode_decode_roundtrip() {
    let payload = sample();
    let json = payload.encode().unwrap();
    let decoded = LicensePayload::decode(json.as_bytes()).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn decode_is_deterministic() {
    let a = sample().encode().unwrap();
    let b = sample().encode().unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_fields_tolerated() {
    // Forward compatibility: newer issuers may add fields.
    let json = r#"{"username":"alice","machineIdHash":"abc","expiryTimestamp":123,"plan":"pro"}"#;
    let decoded = LicensePayload::decode(json.as_bytes()).unwrap();
    assert_eq!(decoded.username, "alice");
}

#[test]
fn malformed_json_is_malformed() {
    for input in ["", "{", "not json", r#"{"username""#] {
        assert_eq!(
            LicensePayload::decode(input.as_bytes()),
            Err(PayloadError::Malformed),
            "input: {input}"
        );
    }
}

#[test]
fn invalid_utf8_is_malformed() {
    assert_eq!(
        LicensePayload::decode(&[0xff, 0xfe, 0x00]),
        Err(PayloadError::Malformed)
    );
}

#[test]
fn non_object_is_structure_error() {
    for input in ["null", "42", r#""string""#, "[1,2]"] {
        assert_eq!(
            LicensePayload::decode(input.as_bytes()),
            Err(PayloadError::Structure),
            "input: {input}"
        );
    }
}

#[test]
fn missing_or_mistyped_fields_are_structure_errors() {
    for input in [
        "{}",
        r#"{"username":"a","machineIdHash":"b"}"#,
        r#"{"username":null,"machineIdHash":"b","expiryTimestamp":1}"#,
        r#"{"username":"a","machineIdHash":7,"expiryTimestamp":1}"#,
        r#"{"username":"a","machineIdHash":"b","expiryTimestamp":1.5}"#,
    ] {
        assert_eq!(
            LicensePayload::decode(input.as_bytes()),
            Err(PayloadError::Structure),
            "input: {input}"
        );
    }
}

#[test]
fn empty_strings_are_structure_errors() {
    let json = r#"{"username":"","machineIdHash":"b","expiryTimestamp":1}"#;
    assert_eq!(
        LicensePayload::decode(json.as_bytes()),
        Err(PayloadError::Structure)
    );
}

#[test]
fn zero_timestamp_is_structure_error() {
    let json = r#"{"username":"a","machineIdHash":"b","expiryTimestamp":0}"#;
    assert_eq!(
        LicensePayload::decode(json.as_bytes()),
        Err(PayloadError::Structure)
    );
}

#[test]
fn negative_timestamp_accepted_by_codec() {
    // Pre-epoch instants are structurally fine; the expiry check rejects
    // them later as long past.
    let json = r#"{"username":"a","machineIdHash":"b","expiryTimestamp":-1000}"#;
    let decoded = LicensePayload::decode(json.as_bytes()).unwrap();
    assert_eq!(decoded.expiry_timestamp, -1000);
}
