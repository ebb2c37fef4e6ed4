//! Secret service implementation.
//!
//! Reads API credentials from `secret.json`.

use crate::paths::SerenityPaths;
use serenity_core::config::SecretConfig;
use serenity_core::{Result, SerenityError};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads [`SecretConfig`] from disk.
///
/// Secrets are never logged; errors mention only the file path.
#[derive(Debug, Clone)]
pub struct SecretService {
    path: PathBuf,
}

impl SecretService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = SerenityPaths::new(base_path)
            .secret_file()
            .map_err(|e| SerenityError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }

    /// Returns `Ok(None)` when no secret file has been created yet.
    pub fn load_secrets(&self) -> Result<Option<SecretConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SerenityError::io(format!(
                "Failed to read secret file at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let config = serde_json::from_str(&content).map_err(|e| SerenityError::Serialization {
            format: "JSON".to_string(),
            message: format!("{} ({})", e, self.path.display()),
        })?;
        Ok(Some(config))
    }
}
