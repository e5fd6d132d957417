//! Configuration loading utilities
//!
//! This module provides environment variable overrides for the console configuration.

use super::models::*;
use crate::utils::error::{ConsoleError, Result};
use std::env;
use tracing::debug;

impl ConsoleConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `CONSOLE_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        debug!("Applying environment overrides");

        if let Ok(base_url) = env::var("CONSOLE_BASE_URL") {
            self.backend.base_url = base_url;
        }
        if let Ok(token) = env::var("CONSOLE_ADMIN_TOKEN") {
            self.backend.admin_token = Some(token);
        }
        if let Ok(timeout) = env::var("CONSOLE_TIMEOUT") {
            self.backend.timeout = timeout
                .parse()
                .map_err(|e| ConsoleError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Ok(interval) = env::var("CONSOLE_POLL_INTERVAL") {
            self.poller.interval = interval
                .parse()
                .map_err(|e| ConsoleError::Config(format!("Invalid poll interval: {}", e)))?;
        }
        if let Ok(enabled) = env::var("CONSOLE_POLL_ENABLED") {
            self.poller.enabled = enabled
                .parse()
                .map_err(|e| ConsoleError::Config(format!("Invalid poll flag: {}", e)))?;
        }
        if let Ok(level) = env::var("CONSOLE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("CONSOLE_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(ConsoleError::Config)?;
        }

        Ok(())
    }
}
