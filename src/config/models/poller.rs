//! Queue status poller configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Run the poller in the background
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between polls
    #[serde(default = "default_poll_interval")]
    pub interval: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: default_poll_interval(),
        }
    }
}

impl PollerConfig {
    pub fn interval_duration(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.interval != default_poll_interval() {
            self.interval = other.interval;
        }
        self
    }
}
