//! Infrastructure layer for Serenity: file locations, atomic TOML storage,
//! configuration and secret loading, and the persistent preference store.

pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod storage;
pub mod toml_preference_store;

pub use crate::config_service::ConfigService;
pub use crate::paths::SerenityPaths;
pub use crate::secret_service::SecretService;
pub use crate::toml_preference_store::TomlPreferenceStore;
