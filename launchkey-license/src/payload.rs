//! The license payload and its wire codec.
//!
//! The payload is the plaintext license record carried inside an encrypted
//! activation key: the licensed username, the keyed digest of the bound
//! machine's identifier, and the expiry instant. Field names on the wire
//! are fixed (`username`, `machineIdHash`, `expiryTimestamp`); keys
//! already in the field decode against them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Codec failures, kept distinct because the validation pipeline reports
/// malformed JSON and bad structure as different outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// Not well-formed JSON (or not UTF-8 at all).
    #[error("payload is not well-formed")]
    Malformed,

    /// Well-formed JSON, but a required field is absent, mistyped, or empty.
    #[error("payload structure is invalid")]
    Structure,
}

/// The plaintext license record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePayload {
    /// Licensed username, trimmed at issuance.
    pub username: String,
    /// Keyed digest of the bound machine identifier, never the raw id.
    #[serde(rename = "machineIdHash")]
    pub machine_id_hash: String,
    /// Expiry instant, milliseconds since the Unix epoch.
    #[serde(rename = "expiryTimestamp")]
    pub expiry_timestamp: i64,
}

impl LicensePayload {
    /// Serializes to the JSON wire form.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses payload bytes, distinguishing syntactic from structural
    /// failure.
    ///
    /// Structure requires all three fields present, `username` and
    /// `machineIdHash` non-empty strings, and `expiryTimestamp` a non-zero
    /// integer. Semantic checks (hash comparison, expiry, trimmed-username
    /// emptiness) belong to the validation pipeline, not here.
    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|_| PayloadError::Malformed)?;

        let obj = value.as_object().ok_or(PayloadError::Structure)?;

        let username = obj
            .get("username")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(PayloadError::Structure)?;

        let machine_id_hash = obj
            .get("machineIdHash")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(PayloadError::Structure)?;

        let expiry_timestamp = obj
            .get("expiryTimestamp")
            .and_then(|v| v.as_i64())
            .filter(|&t| t != 0)
            .ok_or(PayloadError::Structure)?;

        Ok(Self {
            username: username.to_string(),
            machine_id_hash: machine_id_hash.to_string(),
            expiry_timestamp,
        })
    }
}
