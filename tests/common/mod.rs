//! Common test utilities for account-console
//!
//! - `fixtures`: accounts, snapshots and response bodies
//! - `backend`: a `wiremock` server standing in for the admin API

pub mod fixtures;

pub use backend::MockAdminApi;
