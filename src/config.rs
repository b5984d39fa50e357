//! Configuration loading
//!
//! Reads `~/.config/autocode/config.toml`. Loading never fails: a missing file gives
//! the defaults, and a broken one gives the defaults plus a warning for the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod types;

pub use types::{Config, MatchingConfig, OutputConfig};

const CONFIG_DIR: &str = "autocode";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        Self {
            config: Config::default(),
            warning,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Loads the config from its default location.
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::defaults(None);
    };

    match fs::metadata(&path) {
        Ok(_) => load_config_from_path(&path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigResult::defaults(None),
        Err(e) => ConfigResult::defaults(Some(format!(
            "Could not read config {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Loads the config from an explicit path. A missing file is reported as a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult::defaults(Some(format!(
                "Could not read config {}: {}",
                path.display(),
                e
            )));
        }
    };

    match parse_config_toml(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => ConfigResult::defaults(Some(format!(
            "Invalid config {}: {}; using defaults",
            path.display(),
            e
        ))),
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
