//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url has invalid URL format: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "base_url must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("base_url must have a valid host".to_string());
        }

        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if let Some(token) = &self.admin_token {
            if token.trim().is_empty() {
                return Err("admin_token cannot be blank when set".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for PollerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.interval == 0 {
            return Err("interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("invalid log level '{}': {}", self.level, e))
    }
}
