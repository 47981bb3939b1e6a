//! Configuration loading
//!
//! Reads `~/.config/visa-predictor/config.toml`. A missing file means
//! defaults; an unreadable or invalid one also means defaults, plus a warning
//! for the UI to show.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_SERVER_URL, LogConfig, ServerConfig};

use crate::error::PredictorError;

const CONFIG_DIR: &str = "visa-predictor";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any problem encountered while loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{} ({}); using defaults", e, path.display())),
        },
    }
}

/// `Ok(None)` when the file does not exist
fn read_config(path: &Path) -> Result<Option<Config>, PredictorError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map(Some)
}

pub fn parse_config(content: &str) -> Result<Config, PredictorError> {
    toml::from_str(content).map_err(|e| PredictorError::Config(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
