//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (INFOTOOLS_*)
//! 2. TOML config file (if INFOTOOLS_CONFIG_FILE set)
//! 3. Built-in defaults
//!
//! This is the *application* configuration (resource paths, timeouts, ticker
//! cadence). The user-facing settings map lives in [`crate::settings`] and is
//! a separate, mutable store.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (INFOTOOLS_*)
/// 2. TOML config file (if INFOTOOLS_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the user settings file (flat JSON map).
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    /// Path to the favicon hash database (comma-separated text).
    #[serde(default = "default_favicon_db_path")]
    pub favicon_db_path: PathBuf,

    /// Path to the alert ticker template file.
    #[serde(default = "default_alert_template_path")]
    pub alert_template_path: PathBuf,

    /// User-Agent string for HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Validity window for cached site snapshots, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// How often the ticker re-reads the template file, in seconds.
    #[serde(default = "default_template_poll_secs")]
    pub template_poll_secs: u64,

    /// How often a live-clock ticker re-substitutes the time token, in seconds.
    #[serde(default = "default_clock_poll_secs")]
    pub clock_poll_secs: u64,

    /// Columns the ticker text moves per animation frame.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f64,

    /// Horizontal scale factor applied to measured ticker text width.
    #[serde(default = "default_scroll_scale_x")]
    pub scroll_scale_x: f64,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("./resources/config.json")
}

fn default_favicon_db_path() -> PathBuf {
    PathBuf::from("./resources/favicons-database.csv")
}

fn default_alert_template_path() -> PathBuf {
    PathBuf::from("./resources/alertBarText.txt")
}

fn default_user_agent() -> String {
    "infotools/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_template_poll_secs() -> u64 {
    60
}

fn default_clock_poll_secs() -> u64 {
    1
}

fn default_scroll_step() -> f64 {
    2.0
}

fn default_scroll_scale_x() -> f64 {
    1.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            favicon_db_path: default_favicon_db_path(),
            alert_template_path: default_alert_template_path(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
            template_poll_secs: default_template_poll_secs(),
            clock_poll_secs: default_clock_poll_secs(),
            scroll_step: default_scroll_step(),
            scroll_scale_x: default_scroll_scale_x(),
        }
    }
}

impl AppConfig {
    /// HTTP timeout as a Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Template poll cadence as a Duration.
    pub fn template_poll(&self) -> Duration {
        Duration::from_secs(self.template_poll_secs)
    }

    /// Clock poll cadence as a Duration.
    pub fn clock_poll(&self) -> Duration {
        Duration::from_secs(self.clock_poll_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `INFOTOOLS_`
    /// 2. TOML file from `INFOTOOLS_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("INFOTOOLS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("INFOTOOLS_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
