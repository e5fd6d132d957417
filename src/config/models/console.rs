//! Top-level console configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the console needs at startup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub poller: PollerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.backend = self.backend.merge(other.backend);
        self.poller = self.poller.merge(other.poller);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
