use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use serenity_core::preferences::PreferenceStore;
use serenity_infrastructure::{SerenityPaths, TomlPreferenceStore};
use std::path::Path;

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print a stored value, or the default when it is missing
    Get {
        namespace: String,
        key: String,
        #[arg(long, value_enum, default_value_t = ValueKind::Text)]
        kind: ValueKind,
    },
    /// Store a value
    Set {
        namespace: String,
        key: String,
        value: String,
        #[arg(long, value_enum, default_value_t = ValueKind::Text)]
        kind: ValueKind,
    },
    /// Delete a value
    Remove { namespace: String, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Text,
    Bool,
    Int,
}

pub fn run(action: PrefsAction, config_dir: Option<&Path>) -> Result<()> {
    let path = SerenityPaths::new(config_dir).preferences_file()?;
    let store = TomlPreferenceStore::with_path(path);

    match action {
        PrefsAction::Get {
            namespace,
            key,
            kind,
        } => {
            let value = match kind {
                ValueKind::Text => store.get_string(&namespace, &key, ""),
                ValueKind::Bool => store.get_bool(&namespace, &key, false).to_string(),
                ValueKind::Int => store.get_int(&namespace, &key, 0).to_string(),
            };
            println!("{value}");
        }
        PrefsAction::Set {
            namespace,
            key,
            value,
            kind,
        } => match kind {
            ValueKind::Text => store.set_string(&namespace, &key, &value)?,
            ValueKind::Bool => {
                let parsed = value
                    .parse::<bool>()
                    .with_context(|| format!("'{value}' is not true or false"))?;
                store.set_bool(&namespace, &key, parsed)?
            }
            ValueKind::Int => {
                let parsed = value
                    .parse::<i64>()
                    .with_context(|| format!("'{value}' is not an integer"))?;
                store.set_int(&namespace, &key, parsed)?
            }
        },
        PrefsAction::Remove { namespace, key } => store.remove(&namespace, &key)?,
    }

    Ok(())
}
