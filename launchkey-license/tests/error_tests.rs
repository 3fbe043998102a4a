use launchkey_license::{LicenseError, ValidationFailure};

#[test]
fn invalid_argument_display() {
    let err = LicenseError::InvalidArgument("username must not be empty".into());
    let msg = format!("{err}");
    assert!(msg.contains("invalid argument"));
    assert!(msg.contains("username"));
}

#[test]
fn crypto_error_is_wrapped() {
    let crypto_err = launchkey_crypto::SecretKey::from_hex("nope").unwrap_err();
    let err = LicenseError::from(crypto_err);
    let msg = format!("{err}");
    assert!(msg.contains("crypto error"));
    assert!(msg.contains("64 hex characters"));
}

#[test]
fn storage_display() {
    let err = LicenseError::Storage("disk full".into());
    assert!(format!("{err}").contains("disk full"));
}

#[test]
fn failure_messages_are_distinct() {
    let failures = [
        ValidationFailure::MachineIdUnavailable,
        ValidationFailure::InvalidOrCorruptKey,
        ValidationFailure::CorruptPayloadFormat,
        ValidationFailure::InvalidPayloadStructure,
        ValidationFailure::MachineMismatch,
        ValidationFailure::Expired("2025-01-01".into()),
        ValidationFailure::EmptyUsername,
    ];
    let messages: Vec<String> = failures.iter().map(ToString::to_string).collect();
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn expired_message_includes_date() {
    let failure = ValidationFailure::Expired("2025-06-01".into());
    assert!(format!("{failure}").contains("2025-06-01"));
}

#[test]
fn failure_messages_do_not_leak_internals() {
    // The decryption message is identical for every root cause; nothing
    // in it hints at padding, hex, or format specifics.
    let msg = ValidationFailure::InvalidOrCorruptKey.to_string().to_lowercase();
    let words: Vec<&str> = msg
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    for leak in ["padding", "hex", "iv", "cbc", "aes"] {
        assert!(!words.contains(&leak), "message mentions {leak:?}: {msg}");
    }
}
