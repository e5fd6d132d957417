//! # account-console
//!
//! Operator console for an account pool backend. The backend holds a pool
//! of upstream accounts and a list of API keys; this crate drives its admin
//! API.
//!
//! ## Features
//!
//! - **Administration**: add and remove API keys and accounts
//! - **Validation and testing**: check a single account or every registered
//!   account, one at a time, with live progress
//! - **Duplicate suppression**: a second validate (or test) of the same
//!   account is refused while the first is outstanding, and only one batch
//!   runs at a time
//! - **Queue status**: periodic polling of pool utilization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use account_console::{AccountConsole, Config, EventBus};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/console.yaml").await?;
//!     let events = Arc::new(EventBus::default());
//!     let console = AccountConsole::connect(config.backend(), events.clone())?;
//!
//!     let summary = console.validate_all().await?;
//!     println!("{}/{} accounts valid", summary.succeeded, summary.total);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::{
    AccountBackend, AccountConsole, ConsoleEvent, EventBus, EventSink, HttpBackend, NoticeLevel,
    NullSink,
};
pub use core::types::{
    Account, BatchProgress, BatchSummary, ConsoleSnapshot, NewAccount, OperationKind,
    OperationResult, QueueStatus,
};
pub use utils::error::{ConsoleError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Console build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Seconds since the epoch at build time
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("CONSOLE_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("CONSOLE_GIT_HASH").unwrap_or("unknown"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.version, self.git_hash)
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
