//! The shared secret that keys both encryption and machine-id hashing.
//!
//! The secret is a 256-bit value sourced from a 64-character hex string,
//! loaded once at startup and held immutable for the process lifetime.
//! The same raw bytes feed the AES-256 cipher and the HMAC-SHA256 machine
//! hash; regenerating identical ciphertexts and digests across runs for a
//! given secret is a hard compatibility requirement for deployed keys.

use crate::error::{CryptoError, CryptoResult};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the secret in bytes (256 bits).
pub const SECRET_SIZE: usize = 32;

/// Length of the hex representation of the secret.
pub const SECRET_HEX_LEN: usize = SECRET_SIZE * 2;

/// The administrator-held master secret, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_SIZE],
}

impl SecretKey {
    /// Parses the secret from a 64-character hexadecimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly 64 characters or
    /// contains non-hex characters. Callers at process startup should
    /// treat this as fatal.
    pub fn from_hex(hex_str: &str) -> CryptoResult<Self> {
        let hex_str = hex_str.trim();
        if hex_str.len() != SECRET_HEX_LEN {
            return Err(CryptoError::InvalidSecretLength {
                expected: SECRET_HEX_LEN,
                actual: hex_str.len(),
            });
        }

        let decoded = hex::decode(hex_str).map_err(|_| CryptoError::InvalidSecretEncoding)?;

        let mut bytes = [0u8; SECRET_SIZE];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Loads the secret from an environment variable holding the hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or its value is not a
    /// valid 64-character hex string.
    pub fn from_env(var: &str) -> CryptoResult<Self> {
        let value =
            std::env::var(var).map_err(|_| CryptoError::SecretNotConfigured(var.to_string()))?;
        Self::from_hex(&value)
    }

    /// Generates a fresh random secret from the OS RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Returns the raw secret bytes.
    ///
    /// Used by the cipher and the keyed hash; never log or persist these.
    pub(crate) fn as_bytes(&self) -> &[u8; SECRET_SIZE] {
        &self.bytes
    }

    /// Returns the lowercase hex representation, for administrator tooling
    /// that mints and distributes fresh secrets.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
