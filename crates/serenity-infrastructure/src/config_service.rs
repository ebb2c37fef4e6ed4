//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` and caches it.

use crate::paths::SerenityPaths;
use crate::storage::AtomicTomlFile;
use serenity_core::config::AppConfig;
use serenity_core::{Result, SerenityError};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the app configuration.
///
/// A missing or blank file yields `AppConfig::default()`. A file that exists
/// but cannot be parsed is reported as an error rather than silently
/// replaced.
#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default `config.toml`.
    pub fn new() -> Result<Self> {
        let path = SerenityPaths::default()
            .config_file()
            .map_err(|e| SerenityError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = AtomicTomlFile::<AppConfig>::new(self.path.clone())
            .load()?
            .unwrap_or_default();
        tracing::debug!(
            "[ConfigService] Loaded config from {}: model={}, timeout={}s",
            self.path.display(),
            loaded.completion.model,
            loaded.completion.timeout_secs
        );

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }
}
