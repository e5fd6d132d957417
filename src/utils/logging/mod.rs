//! Logging initialisation
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{ConsoleError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConsoleError::Config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| ConsoleError::Config(format!("Failed to install logger: {}", e)))
}

/// Mask a secret for display: first 16 characters followed by `****`
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(16).collect();
    format!("{}****", visible)
}
