//! Validation outcomes.
//!
//! Every activation attempt resolves to exactly one of two states: granted,
//! carrying the normalized username and expiry instant, or denied, carrying
//! the reason. No partial states, and nothing here ever panics; the input
//! is attacker-controlled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a key was rejected.
///
/// The kinds stay distinct for operator logging and tests; end users see
/// only the Display message.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationFailure {
    /// No machine identifier available on the requesting host.
    #[error("current machine ID is not available")]
    MachineIdUnavailable,

    /// Decryption failed: wrong format, wrong secret, or tampering.
    /// Uniform by design; the cause is never surfaced.
    #[error("activation key is invalid or corrupt")]
    InvalidOrCorruptKey,

    /// Decrypted, but the payload is not well-formed JSON.
    #[error("activation key data is corrupt")]
    CorruptPayloadFormat,

    /// Well-formed JSON with missing or mistyped fields.
    #[error("activation key structure is invalid")]
    InvalidPayloadStructure,

    /// Key is bound to a different machine.
    #[error("this key is not valid for this machine")]
    MachineMismatch,

    /// Key has expired, or its expiry instant is unrepresentable.
    /// Carries the formatted expiry date when one could be parsed.
    #[error("license expired or expiry date invalid ({0})")]
    Expired(String),

    /// Payload carried a username that is empty after trimming.
    #[error("key does not contain a valid username")]
    EmptyUsername,
}

/// The outcome of validating an activation key on a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Validation {
    /// Key grants access on this machine until `expires_at`.
    Granted {
        /// Licensed username, whitespace-trimmed.
        username: String,
        /// Expiry instant; serialized as ISO-8601.
        expires_at: DateTime<Utc>,
    },
    /// Key denied for the given reason.
    Denied {
        /// The typed denial reason.
        reason: ValidationFailure,
    },
}

impl Validation {
    pub(crate) fn denied(reason: ValidationFailure) -> Self {
        Self::Denied { reason }
    }

    /// Returns true if access was granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// Returns the licensed username if granted.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Granted { username, .. } => Some(username),
            Self::Denied { .. } => None,
        }
    }

    /// Returns the expiry instant in ISO-8601 form if granted.
    #[must_use]
    pub fn expiry_iso8601(&self) -> Option<String> {
        match self {
            Self::Granted { expires_at, .. } => {
                Some(expires_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
            }
            Self::Denied { .. } => None,
        }
    }

    /// Returns the denial reason if denied.
    #[must_use]
    pub fn reason(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Granted { .. } => None,
            Self::Denied { reason } => Some(reason),
        }
    }

    /// Returns the human-readable denial message if denied.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.reason().map(ToString::to_string)
    }
}
