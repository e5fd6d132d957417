//! Configuration management for the console
//!
//! This module handles loading, validation, and management of the console configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ConsoleError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the console
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Console configuration
    pub console: ConsoleConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConsoleError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let console: ConsoleConfig = serde_yaml::from_str(content)
            .map_err(|e| ConsoleError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { console };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let console = ConsoleConfig::from_env()?;
        let config = Self { console };

        config.validate()?;
        Ok(config)
    }

    /// Load the configuration the binary runs with: the YAML file when one is
    /// given, otherwise the defaults, then `CONSOLE_*` overrides on top
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut console: ConsoleConfig = match path {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    ConsoleError::Config(format!("Failed to read config file: {}", e))
                })?;
                serde_yaml::from_str(&content)
                    .map_err(|e| ConsoleError::Config(format!("Failed to parse config: {}", e)))?
            }
            None => ConsoleConfig::default(),
        };
        console.apply_env()?;

        let config = Self { console };
        config.validate()?;
        Ok(config)
    }

    /// Get backend configuration
    pub fn backend(&self) -> &BackendConfig {
        &self.console.backend
    }

    /// Get poller configuration
    pub fn poller(&self) -> &PollerConfig {
        &self.console.poller
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.console.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.console
            .backend
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Backend config error: {}", e)))?;

        self.console
            .poller
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Poller config error: {}", e)))?;

        self.console
            .logging
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.console = self.console.merge(other.console);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.console)
            .map_err(|e| ConsoleError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
