//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Infinite-scroll trigger settings
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if url::Url::parse(&self.api.base_url).is_err() {
            return Err(AppError::validation(format!(
                "api.base_url is not a valid URL: {}",
                self.api.base_url
            )));
        }
        if !(self.scroll.threshold > 0.0 && self.scroll.threshold <= 1.0) {
            return Err(AppError::validation(
                "scroll.threshold must be within (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Catalog API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the list service
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Infinite-scroll trigger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Fraction of the content that must be scrolled before the next
    /// page is requested
    #[serde(default = "defaults::threshold")]
    pub threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::threshold(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "http://localhost:3001".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; storescout/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn threshold() -> f64 {
        0.8
    }
}
