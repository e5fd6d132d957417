//! Configuration data models
//!
//! This module defines all configuration structures used by the console.

#![allow(missing_docs)]

pub mod backend;
pub mod console;
pub mod logging;
pub mod poller;

// Re-export all configuration types
pub use backend::*;
pub use console::*;
pub use logging::*;
pub use poller::*;

/// Default backend base URL
pub fn default_base_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default user agent sent to the backend
pub fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

/// Default queue status poll interval in seconds
pub fn default_poll_interval() -> u64 {
    5
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default boolean true
pub fn default_true() -> bool {
    true
}
