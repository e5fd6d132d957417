//! Backend-owned pool utilization snapshot

use serde::{Deserialize, Serialize};

/// Read-only view of the backend's account pool.
///
/// `available + in_use == total` is maintained by the backend and is not
/// checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub available: u64,
    pub in_use: u64,
    pub total: u64,
    #[serde(default)]
    pub in_use_accounts: Vec<String>,
    #[serde(default)]
    pub available_accounts: Vec<String>,
}
