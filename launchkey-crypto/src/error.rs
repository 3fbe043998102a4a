//! Error types for the crypto layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Secret key string has the wrong length.
    #[error("secret key must be {expected} hex characters, got {actual}")]
    InvalidSecretLength { expected: usize, actual: usize },

    /// Secret key string contains non-hexadecimal characters.
    #[error("secret key must be hexadecimal")]
    InvalidSecretEncoding,

    /// Secret key environment variable is missing or unreadable.
    #[error("secret key not found in environment variable {0}")]
    SecretNotConfigured(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),
}
