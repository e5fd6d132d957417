//! Batch operation orchestrator
//!
//! Runs one operation kind over a snapshot of accounts, one account at a
//! time, recording every outcome and publishing progress after each item.

mod orchestrator;


pub use orchestrator::{BatchOrchestrator, summary_notice};
