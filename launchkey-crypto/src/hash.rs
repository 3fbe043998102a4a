//! Keyed machine-id hashing.
//!
//! Machine identifiers are never stored or transmitted raw, only their
//! HMAC-SHA256 digest under the shared secret, so a party without the
//! secret cannot forge a matching digest. The same secret keys both this
//! hash and the cipher; a deliberate simplicity-over-key-separation choice
//! carried from the original deployment.

use crate::secret::SecretKey;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the keyed digest of a machine identifier as lowercase hex.
///
/// Deterministic: the same identifier and secret always produce the same
/// digest, across calls and across process restarts.
#[must_use]
pub fn machine_id_hash(secret: &SecretKey, machine_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes().as_slice())
        .expect("HMAC accepts keys of any length");
    mac.update(machine_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
