//! Backend trait definition

use crate::core::types::{
    ConsoleSnapshot, NewAccount, QueueStatus, TestResponse, ValidateResponse,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote account backend.
///
/// Every method performs exactly one round trip and does not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountBackend: Send + Sync {
    /// `POST admin/accounts/validate`
    async fn validate_account(&self, identifier: &str) -> Result<ValidateResponse>;

    /// `POST admin/accounts/test`
    async fn test_account(&self, identifier: &str) -> Result<TestResponse>;

    /// `GET admin/queue/status`
    async fn queue_status(&self) -> Result<QueueStatus>;

    /// `GET admin/config`
    async fn snapshot(&self) -> Result<ConsoleSnapshot>;

    /// `POST admin/keys`
    async fn add_key(&self, key: &str) -> Result<()>;

    /// `DELETE admin/keys/{key}`
    async fn delete_key(&self, key: &str) -> Result<()>;

    /// `POST admin/accounts`
    async fn add_account(&self, account: &NewAccount) -> Result<()>;

    /// `DELETE admin/accounts/{identifier}`
    async fn delete_account(&self, identifier: &str) -> Result<()>;
}
