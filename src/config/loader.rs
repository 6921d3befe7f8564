use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::NavError;

const CONFIG_DIR: &str = "spatnav";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user configuration, falling back to defaults.
///
/// A missing file is not worth reporting; a malformed one is logged.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, NavError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, NavError> {
    toml::from_str::<Config>(content).map_err(|e| NavError::InvalidConfig(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
