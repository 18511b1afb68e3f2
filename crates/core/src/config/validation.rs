//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `cache_ttl_secs`, `template_poll_secs`, or `clock_poll_secs` is 0
    /// - `scroll_step` or `scroll_scale_x` is not a positive number
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "cache_ttl_secs".into(), reason: "must be at least 1".into() });
        }
        if self.template_poll_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "template_poll_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.clock_poll_secs == 0 {
            return Err(ConfigError::Invalid { field: "clock_poll_secs".into(), reason: "must be at least 1".into() });
        }

        if !self.scroll_step.is_finite() || self.scroll_step <= 0.0 {
            return Err(ConfigError::Invalid { field: "scroll_step".into(), reason: "must be positive".into() });
        }
        if !self.scroll_scale_x.is_finite() || self.scroll_scale_x <= 0.0 {
            return Err(ConfigError::Invalid { field: "scroll_scale_x".into(), reason: "must be positive".into() });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        Ok(())
    }
}
