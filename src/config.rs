//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing default file is not an error; every field has a default.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CityscoutError;

pub use types::{Config, HistoryConfig, SuggestConfig};

/// Default location: `<config_dir>/cityscout/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cityscout").join("config.toml"))
}

/// Load configuration
///
/// With an explicit `path`, the file must exist. Without one, the default
/// location is tried and defaults are used when it is absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, CityscoutError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config, CityscoutError> {
    Ok(toml::from_str(text)?)
}

fn read_config(path: &Path) -> Result<Config, CityscoutError> {
    let text = fs::read_to_string(path).map_err(|source| CityscoutError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from {}", path.display());
    parse_config(&text)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
