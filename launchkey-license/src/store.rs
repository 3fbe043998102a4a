//! Persistence of activation state.
//!
//! After a granted validation the client records `{isActivated,
//! activationData}` so later launches skip the activation screen. Only the
//! granted outcome is stored, never the activation key string, the
//! machine id, or any hash, so the file discloses nothing a casual copy
//! could reuse on another machine (re-validation re-checks the key).

use crate::error::{LicenseError, LicenseResult};
use crate::validation::Validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A persisted activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    /// Whether this install is activated.
    #[serde(rename = "isActivated")]
    pub is_activated: bool,
    /// Licensed username from the granted validation.
    pub username: String,
    /// Expiry instant of the license.
    #[serde(rename = "expiryDate")]
    pub expires_at: DateTime<Utc>,
    /// When the activation was recorded on this machine.
    #[serde(rename = "activatedAt")]
    pub activated_at: DateTime<Utc>,
}

/// File-backed activation store.
#[derive(Debug, Clone)]
pub struct ActivationStore {
    path: PathBuf,
}

impl ActivationStore {
    /// Opens the store at the platform data directory
    /// (`<data-dir>/launchkey/activation.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory exists.
    pub fn open_default() -> LicenseResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| LicenseError::Storage("no platform data directory".to_string()))?;
        Ok(Self::at_path(base.join("launchkey").join("activation.json")))
    }

    /// Opens the store at an explicit path. Tests point this at a temp dir.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a granted validation.
    ///
    /// # Errors
    ///
    /// Returns an error for a denied outcome or on I/O failure.
    pub fn save(&self, outcome: &Validation) -> LicenseResult<ActivationRecord> {
        let Validation::Granted {
            username,
            expires_at,
        } = outcome
        else {
            return Err(LicenseError::Storage(
                "cannot persist a denied validation".to_string(),
            ));
        };

        let record = ActivationRecord {
            is_activated: true,
            username: username.clone(),
            expires_at: *expires_at,
            activated_at: Utc::now(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LicenseError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json).map_err(|e| LicenseError::Storage(e.to_string()))?;

        tracing::info!(path = %self.path.display(), "activation state saved");
        Ok(record)
    }

    /// Loads the persisted activation, if any.
    ///
    /// A missing file is `Ok(None)`; an unreadable or corrupt file is an
    /// error so the caller can fall back to re-activation deliberately.
    pub fn load(&self) -> LicenseResult<Option<ActivationRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LicenseError::Storage(e.to_string())),
        }
    }

    /// Returns true if a persisted activation exists and is marked active.
    #[must_use]
    pub fn is_activated(&self) -> bool {
        matches!(self.load(), Ok(Some(record)) if record.is_activated)
    }

    /// Removes the persisted activation (the logout flow).
    ///
    /// Removing an already-absent file succeeds.
    pub fn clear(&self) -> LicenseResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LicenseError::Storage(e.to_string())),
        }
    }
}
