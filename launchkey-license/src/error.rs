//! Error types for the licensing module.

use thiserror::Error;

/// Licensing-specific errors.
///
/// These surface on the administrator side, where the caller is trusted
/// and bad input should fail loudly. Client-side validation failures are
/// not errors; they are [`crate::Validation::Denied`] outcomes.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Issuance called with a bad argument (empty username/machine id,
    /// non-positive day count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The shared secret could not be loaded, or a primitive failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] launchkey_crypto::CryptoError),

    /// Activation-state storage failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
