//! Runtime configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the JSON config file in
//! the user's config directory, environment variables, then CLI flags (applied
//! by the binary).
//! - `GOAL_CREATOR_SUGGESTION_URL` - Suggestion Service base URL
//! - `GOAL_CREATOR_TIMEOUT_SECS` - request timeout in seconds, `0` disables it

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::suggestion::DEFAULT_URL;

const APP_NAME: &str = "goal-creator";
const CONFIG_FILE: &str = "config.json";

const URL_ENV: &str = "GOAL_CREATOR_SUGGESTION_URL";
const TIMEOUT_ENV: &str = "GOAL_CREATOR_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Suggestion Service
    pub suggestion_url: String,
    /// Seconds before a suggestion request is abandoned. `0` waits forever.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_url: DEFAULT_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    /// Falls back to defaults when the file is unreadable.
    pub fn load() -> Self {
        let mut config = match get_config_path().and_then(|path| Self::from_path(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Apply environment overrides through `lookup`. Unparseable values are
    /// logged and ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(URL_ENV) {
            self.suggestion_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid {}: {:?}", TIMEOUT_ENV, raw),
            }
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
