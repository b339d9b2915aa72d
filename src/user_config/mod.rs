//! Optional user-level configuration loaded from `~/.grocery/config.toml`.
mod loader;
pub use loader::{load_user_config, load_user_config_from};
use crate::utils::{get_data_file_path, get_grocery_home};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
/// Store-scoped settings (`[store]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Location of the JSON data file.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}
/// Top-level user configuration, deserialized from `~/.grocery/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub store: StoreConfig,
}
impl UserConfig {
    /// Data file to use: the CLI override, then `[store].data_file`, then
    /// `~/.grocery/grocery-lists.json`.
    #[must_use]
    pub fn resolve_data_file(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.store.data_file.clone())
            .unwrap_or_else(|| get_data_file_path(&get_grocery_home()))
    }
}
/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> PathBuf {
    get_grocery_home().join("config.toml")
}
#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
