//! Application Settings
//!
//! Endpoints, logging and sync policy, persisted as TOML in the config directory.

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_MEDIA_BASE_URL, SETTINGS_FILE_NAME,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::RetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Persisted application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Root of the content and preferences API
    pub api_base_url: String,
    /// Root that relative media paths are resolved against
    pub media_base_url: String,
    /// Per-request timeout; requests wait indefinitely when unset
    pub request_timeout_secs: Option<u64>,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Retry policy for the remote language preference push
    pub sync: RetryConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sync: RetryConfig::default(),
        }
    }
}

fn get_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

impl AppSettings {
    /// Load settings from the config directory
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_settings_path()?)
    }

    /// Load settings from a file; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string_pretty(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}
