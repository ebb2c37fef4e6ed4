pub mod advice;
pub mod prefs;
pub mod session;

use anyhow::Result;
use serenity_core::config::AppConfig;
use serenity_infrastructure::{ConfigService, SerenityPaths};
use std::path::Path;

/// Reads `config.toml` from `config_dir`, or from the default location.
pub fn load_config(config_dir: Option<&Path>) -> Result<AppConfig> {
    let path = SerenityPaths::new(config_dir).config_file()?;
    Ok(ConfigService::with_path(path).get_config()?)
}
