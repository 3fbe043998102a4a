//! Activation key issuance and validation.
//!
//! Issuance is administrator-side and trusted: bad arguments fail loudly.
//! Validation is client-side and hostile: every failure path resolves to a
//! typed [`Validation::Denied`] outcome, and no input can cause a panic.
//!
//! Activation keys are the AES-256-CBC encryption of a JSON
//! [`LicensePayload`], in the `ivhex:cipherhex` wire format. Both sides of
//! the boundary share one 256-bit secret.

use crate::error::{LicenseError, LicenseResult};
use crate::payload::{LicensePayload, PayloadError};
use crate::validation::{Validation, ValidationFailure};
use chrono::{DateTime, Duration, Utc};
use launchkey_crypto::{decrypt, encrypt, machine_id_hash, SecretKey};

/// Environment variable holding the hex-encoded shared secret.
pub const SECRET_ENV_VAR: &str = "LAUNCHKEY_SECRET";

/// Issues and validates activation keys under one shared secret.
///
/// The secret is loaded once and held immutable; a `KeyService` is safe to
/// share across threads since validation is pure and issuance only consumes
/// OS randomness.
#[derive(Debug, Clone)]
pub struct KeyService {
    secret: SecretKey,
}

impl KeyService {
    /// Creates a service around an already-loaded secret.
    #[must_use]
    pub fn new(secret: SecretKey) -> Self {
        Self { secret }
    }

    /// Loads the secret from [`SECRET_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or not a 64-character hex
    /// string. Binaries treat this as fatal at startup.
    pub fn from_env() -> LicenseResult<Self> {
        Ok(Self::new(SecretKey::from_env(SECRET_ENV_VAR)?))
    }

    /// Issues an activation key binding `username` to `machine_id` for
    /// `expiry_days` days.
    ///
    /// Administrator-side only; the secret must never ship with a client
    /// that only validates. Expiry is computed as whole 24-hour increments
    /// from now, in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidArgument`] if `username` or
    /// `machine_id` is empty after trimming, or `expiry_days` is not
    /// positive.
    pub fn generate_key(
        &self,
        username: &str,
        machine_id: &str,
        expiry_days: i64,
    ) -> LicenseResult<String> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LicenseError::InvalidArgument(
                "username must not be empty".to_string(),
            ));
        }

        let machine_id = machine_id.trim();
        if machine_id.is_empty() {
            return Err(LicenseError::InvalidArgument(
                "machine ID must not be empty".to_string(),
            ));
        }

        if expiry_days <= 0 {
            return Err(LicenseError::InvalidArgument(
                "expiry days must be a positive integer".to_string(),
            ));
        }

        let lifetime = Duration::try_days(expiry_days)
            .ok_or_else(|| LicenseError::InvalidArgument("expiry days out of range".to_string()))?;
        let expires_at = Utc::now()
            .checked_add_signed(lifetime)
            .ok_or_else(|| LicenseError::InvalidArgument("expiry days out of range".to_string()))?;

        let payload = LicensePayload {
            username: username.to_string(),
            machine_id_hash: machine_id_hash(&self.secret, machine_id),
            expiry_timestamp: expires_at.timestamp_millis(),
        };

        let plaintext = payload.encode()?;
        let key = encrypt(&self.secret, plaintext.as_bytes())?;

        tracing::info!(username, expiry_days, "issued activation key");
        Ok(key)
    }

    /// Validates an activation key against the requesting machine.
    ///
    /// Short-circuits on the first failing check; never panics for any
    /// `activation_key` value. The caller persists the granted outcome.
    ///
    /// Note: the machine id is hashed *untrimmed* here, while issuance
    /// trims before hashing. Keys issued against an id with surrounding
    /// whitespace therefore only match hosts that report it without the
    /// whitespace; deployed keys depend on this behavior.
    #[must_use]
    pub fn validate_key(&self, activation_key: &str, current_machine_id: &str) -> Validation {
        if current_machine_id.is_empty() {
            return deny(ValidationFailure::MachineIdUnavailable);
        }

        let Some(plaintext) = decrypt(&self.secret, activation_key.trim()) else {
            return deny(ValidationFailure::InvalidOrCorruptKey);
        };

        let payload = match LicensePayload::decode(&plaintext) {
            Ok(payload) => payload,
            Err(PayloadError::Malformed) => {
                return deny(ValidationFailure::CorruptPayloadFormat);
            }
            Err(PayloadError::Structure) => {
                return deny(ValidationFailure::InvalidPayloadStructure);
            }
        };

        let current_hash = machine_id_hash(&self.secret, current_machine_id);
        if payload.machine_id_hash != current_hash {
            return deny(ValidationFailure::MachineMismatch);
        }

        let now = Utc::now();
        let expires_at = match DateTime::from_timestamp_millis(payload.expiry_timestamp) {
            Some(expiry) if expiry > now => expiry,
            Some(expiry) => {
                return deny(ValidationFailure::Expired(
                    expiry.format("%Y-%m-%d").to_string(),
                ));
            }
            None => {
                return deny(ValidationFailure::Expired("invalid date".to_string()));
            }
        };

        let username = payload.username.trim();
        if username.is_empty() {
            return deny(ValidationFailure::EmptyUsername);
        }

        tracing::info!(username, %expires_at, "activation key accepted");
        Validation::Granted {
            username: username.to_string(),
            expires_at,
        }
    }
}

/// Kinds only go to the logs; hash values and key material never do.
fn deny(reason: ValidationFailure) -> Validation {
    tracing::debug!(?reason, "activation key denied");
    Validation::denied(reason)
}
