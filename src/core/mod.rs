//! Core functionality for the console
//!
//! This module contains the operator-side business logic: the backend
//! client, the duplicate-invocation guards, batch orchestration and the
//! queue status poller, all tied together by [`AccountConsole`].

pub mod batch;
pub mod client;
pub mod console;
pub mod events;
pub mod guard;
pub mod poller;
pub mod types;


// Re-export commonly used types
pub use batch::BatchOrchestrator;
pub use client::{AccountBackend, HttpBackend, OperationClient};
pub use console::AccountConsole;
pub use events::{ConsoleEvent, EventBus, EventSink, NoticeLevel, NullSink};
pub use guard::{BatchGuard, InvocationGuard};
pub use poller::{PollerHandle, StatusPoller};
