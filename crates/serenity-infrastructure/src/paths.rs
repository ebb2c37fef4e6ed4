//! Unified path management for Serenity configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/serenity/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! └── preferences.toml         # Namespaced user preferences
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-platform config subdirectory.
const APP_DIR_NAME: &str = "serenity";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Neither a base directory nor a platform config directory is available.
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

/// Resolves every file location from one root.
///
/// With a base path (tests, portable installs) everything lives directly
/// under it; otherwise the platform config directory is used.
#[derive(Debug, Clone, Default)]
pub struct SerenityPaths {
    base: Option<PathBuf>,
}

impl SerenityPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the Serenity configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/serenity/`
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path to `secret.json`.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    /// Path to `preferences.toml`.
    pub fn preferences_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("preferences.toml"))
    }
}
