//! Shared test helpers for license tests.

#![allow(dead_code)]

use launchkey_crypto::SecretKey;
use launchkey_license::KeyService;

pub const TEST_SECRET_HEX: &str =
    "65cad455d8eacf593d363d6eb2df259d6efff9330b5f46b6f0f46f1e566104e0";

/// Returns a deterministic secret for forging payloads in tests.
pub fn test_secret() -> SecretKey {
    SecretKey::from_hex(TEST_SECRET_HEX).unwrap()
}

/// A service over the deterministic test secret.
pub fn test_service() -> KeyService {
    KeyService::new(test_secret())
}

/// Encrypts an arbitrary payload string under the test secret, producing
/// an activation key the validator will decrypt successfully. Used to
/// exercise payload-format and structure checks directly.
pub fn forge_key(payload_json: &str) -> String {
    launchkey_crypto::encrypt(&test_secret(), payload_json.as_bytes()).unwrap()
}

/// Forges a structurally-valid key with the given fields, hashing the
/// machine id exactly as issuance does (trimmed).
pub fn forge_key_for(username: &str, machine_id: &str, expiry_timestamp: i64) -> String {
    let hash = launchkey_crypto::machine_id_hash(&test_secret(), machine_id.trim());
    forge_key(&format!(
        r#"{{"username":{},"machineIdHash":"{hash}","expiryTimestamp":{expiry_timestamp}}}"#,
        serde_json::to_string(username).unwrap()
    ))
}
