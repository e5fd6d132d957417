//! Queue status poller
//!
//! Periodically republishes the backend's pool utilization. It shares no
//! state with the batch orchestrator or the guards.

mod status;


pub use status::{PollerHandle, StatusPoller};
