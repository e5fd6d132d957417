//! Core type definition module
//!
//! Data shapes shared by the backend client, the guards, the batch
//! orchestrator and the status poller.

pub mod account;
pub mod operation;
pub mod progress;
pub mod queue;


// Re-export all public types
pub use account::*;
pub use operation::*;
pub use progress::*;
pub use queue::*;
