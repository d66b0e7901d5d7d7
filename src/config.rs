//! Top-level application configuration.
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config.yaml` under the platform config directory, then environment
//! variable overrides (`CROSSOVER_API_URL`, `CROSSOVER_TIMEOUT_SECS`).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CrossoverError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://rickandmortyapi.com/api".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location with env overrides applied
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Path to the user-level config file, if a home directory exists
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "crossover")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(api_url) = env::var("CROSSOVER_API_URL") {
            self.api_url = api_url;
        }
        if let Ok(timeout) = env::var("CROSSOVER_TIMEOUT_SECS") {
            self.timeout_secs = timeout.parse().map_err(|_| {
                CrossoverError::Config(format!(
                    "CROSSOVER_TIMEOUT_SECS must be a number of seconds, got '{timeout}'"
                ))
            })?;
        }
        Ok(())
    }
}
