//! TOML-backed implementation of [`PreferenceStore`].
//!
//! The whole store is one file, one table per namespace:
//!
//! ```toml
//! [serenity_ai_prefs]
//! theme = "dark"
//! notifications_enabled = true
//! ```

use crate::paths::SerenityPaths;
use crate::storage::AtomicTomlFile;
use serde::{Deserialize, Serialize};
use serenity_core::preferences::PreferenceStore;
use serenity_core::{Result, SerenityError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single stored value. Variant order matters for untagged decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

type Namespaces = BTreeMap<String, BTreeMap<String, PreferenceValue>>;

/// Preference store persisted to `preferences.toml`.
pub struct TomlPreferenceStore {
    file: AtomicTomlFile<Namespaces>,
}

impl TomlPreferenceStore {
    /// Opens the store at the default location.
    pub fn new() -> Result<Self> {
        let path = SerenityPaths::default()
            .preferences_file()
            .map_err(|e| SerenityError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Opens the store at an explicit path (tests, portable installs).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn lookup(&self, namespace: &str, key: &str) -> Option<PreferenceValue> {
        match self.file.load() {
            Ok(namespaces) => namespaces?.get(namespace)?.get(key).cloned(),
            Err(e) => {
                tracing::warn!(
                    "[TomlPreferenceStore] Failed to read {}: {}; using default for {}.{}",
                    self.file.path().display(),
                    e,
                    namespace,
                    key
                );
                None
            }
        }
    }

    fn store(&self, namespace: &str, key: &str, value: PreferenceValue) -> Result<()> {
        tracing::debug!("[TomlPreferenceStore] set {}.{}", namespace, key);
        self.file.update(Namespaces::new(), |namespaces| {
            namespaces
                .entry(namespace.to_string())
                .or_default()
                .insert(key.to_string(), value);
        })?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get_string(&self, namespace: &str, key: &str, default: &str) -> String {
        match self.lookup(namespace, key) {
            Some(PreferenceValue::Text(value)) => value,
            _ => default.to_string(),
        }
    }

    fn set_string(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.store(namespace, key, PreferenceValue::Text(value.to_string()))
    }

    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool {
        match self.lookup(namespace, key) {
            Some(PreferenceValue::Bool(value)) => value,
            _ => default,
        }
    }

    fn set_bool(&self, namespace: &str, key: &str, value: bool) -> Result<()> {
        self.store(namespace, key, PreferenceValue::Bool(value))
    }

    fn get_int(&self, namespace: &str, key: &str, default: i64) -> i64 {
        match self.lookup(namespace, key) {
            Some(PreferenceValue::Int(value)) => value,
            _ => default,
        }
    }

    fn set_int(&self, namespace: &str, key: &str, value: i64) -> Result<()> {
        self.store(namespace, key, PreferenceValue::Int(value))
    }

    fn remove(&self, namespace: &str, key: &str) -> Result<()> {
        self.file.update(Namespaces::new(), |namespaces| {
            if let Some(entries) = namespaces.get_mut(namespace) {
                entries.remove(key);
                if entries.is_empty() {
                    namespaces.remove(namespace);
                }
            }
        })?;
        Ok(())
    }
}
