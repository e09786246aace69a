//! Configuration handling for the TUI

use crate::signup::DEFAULT_SIGNUP_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Simulated network delay before a submission completes
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
/// How long the success banner stays before the form clears itself
pub const DEFAULT_SUCCESS_RESET_MS: u64 = 5000;

const ENDPOINT_ENV: &str = "REGISTER_SIGNUP_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterConfig {
    /// Simulated signup latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Delay before the form resets after a success, in milliseconds
    pub success_reset_ms: Option<u64>,
    /// Signup endpoint the request would be posted to
    pub signup_endpoint: Option<String>,
}

impl RegisterConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "register", "register-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.signup_endpoint = Some(endpoint);
        }
        Ok(config)
    }

    /// Load configuration from a specific file; missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: RegisterConfig = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "Loaded config");
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn success_reset_delay(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms.unwrap_or(DEFAULT_SUCCESS_RESET_MS))
    }

    pub fn signup_endpoint(&self) -> &str {
        self.signup_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_SIGNUP_ENDPOINT)
    }
}
