//! Secret handling and activation-key encryption for LaunchKey.
//!
//! This crate owns the cryptographic primitives behind machine-bound
//! activation keys:
//!
//! - [`SecretKey`]: the 256-bit administrator-held secret, parsed from a
//!   64-character hex string at startup and held immutable thereafter
//! - [`encrypt`] / [`decrypt`]: AES-256-CBC encryption of license payloads
//!   into the `ivhex:cipherhex` activation-key format
//! - [`machine_id_hash`]: HMAC-SHA256 keyed digest of machine identifiers
//!
//! # Design Principles
//!
//! - **Uniform decryption failure**: [`decrypt`] returns `None` for every
//!   bad input, so forged keys reveal nothing about why they were rejected
//! - **One secret, two uses**: the cipher key and the hash key are the same
//!   raw bytes, preserving hash/ciphertext compatibility across runs
//! - **No I/O**: loading the secret from the environment is the only
//!   interaction with the outside world

mod cipher;
mod error;
mod hash;
mod secret;

pub use cipher::{decrypt, encrypt, IV_HEX_LEN, IV_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use hash::machine_id_hash;
pub use secret::{SecretKey, SECRET_HEX_LEN, SECRET_SIZE};
