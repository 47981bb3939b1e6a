// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Prediction service location
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct LogConfig {
    /// File to append log lines to; logging is off when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}
