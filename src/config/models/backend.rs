//! Backend connection configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how to reach the account backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:5001`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every admin request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            admin_token: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Merge backend configurations (other wins where it differs from defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_base_url() {
            self.base_url = other.base_url;
        }
        if other.admin_token.is_some() {
            self.admin_token = other.admin_token;
        }
        if other.timeout != default_timeout() {
            self.timeout = other.timeout;
        }
        if other.user_agent != default_user_agent() {
            self.user_agent = other.user_agent;
        }
        self
    }
}
