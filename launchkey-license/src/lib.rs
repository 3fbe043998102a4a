//! Activation key issuance and validation for LaunchKey.
//!
//! This crate handles:
//! - Issuing machine-bound, time-limited activation keys (administrator side)
//! - Validating keys against the requesting machine (client side)
//! - Machine identifier acquisition
//! - Persisting activation state after a granted validation
//!
//! # Design Principles
//!
//! - **Offline by construction**: no network calls anywhere; keys are
//!   issued offline and validated locally against a shared secret
//! - **Machine binding**: keys carry a keyed hash of the target machine's
//!   identifier, never the identifier itself
//! - **Hostile-input validation**: `validate_key` resolves every failure to
//!   a typed outcome and never panics; decryption failures are uniform so
//!   forged keys reveal nothing
//! - **Loud issuance**: administrator-side argument errors abort the call
//!   with a descriptive error
//!
//! # Activation Key Format
//!
//! `ivhex(32):cipherhex`: the AES-256-CBC encryption of a JSON payload
//! `{username, machineIdHash, expiryTimestamp}` under the shared secret.

mod device;
mod error;
mod key;
mod payload;
mod store;
mod validation;

pub use device::current_machine_id;
pub use error::{LicenseError, LicenseResult};
pub use key::{KeyService, SECRET_ENV_VAR};
pub use payload::{LicensePayload, PayloadError};
pub use store::{ActivationRecord, ActivationStore};
pub use validation::{Validation, ValidationFailure};
