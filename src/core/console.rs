//! Account console session
//!
//! [`AccountConsole`] owns every piece of per-session state: the invocation
//! guards, the batch orchestrator with its progress, and the status poller.
//! Build one per operator session and drop it on logout.

use crate::config::BackendConfig;
use crate::core::batch::BatchOrchestrator;
use crate::core::client::{AccountBackend, HttpBackend, OperationClient};
use crate::core::events::{ConsoleEvent, EventSink};
use crate::core::guard::InvocationGuard;
use crate::core::poller::{PollerHandle, StatusPoller};
use crate::core::types::{
    Account, BatchProgress, BatchSummary, ConsoleSnapshot, NewAccount, OperationKind,
    OperationResult, QueueStatus,
};
use crate::utils::error::{ConsoleError, Result};
use crate::utils::logging::mask_secret;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct AccountConsole {
    backend: Arc<dyn AccountBackend>,
    client: OperationClient,
    invocations: InvocationGuard,
    orchestrator: BatchOrchestrator,
    poller: Arc<StatusPoller>,
    events: Arc<dyn EventSink>,
}

impl AccountConsole {
    pub fn new(backend: Arc<dyn AccountBackend>, events: Arc<dyn EventSink>) -> Self {
        let client = OperationClient::new(Arc::clone(&backend));
        let orchestrator = BatchOrchestrator::new(client.clone(), Arc::clone(&events));
        let poller = Arc::new(StatusPoller::new(Arc::clone(&backend), Arc::clone(&events)));

        Self {
            backend,
            client,
            invocations: InvocationGuard::new(),
            orchestrator,
            poller,
            events,
        }
    }

    /// Console talking HTTP to the configured backend
    pub fn connect(config: &BackendConfig, events: Arc<dyn EventSink>) -> Result<Self> {
        let backend = HttpBackend::new(config)?;
        info!("Account console connected to {}", backend.base_url());
        Ok(Self::new(Arc::new(backend), events))
    }

    // ---- single-account operations ----

    /// Validate one account unless a validate for it is already outstanding
    pub async fn validate_account(&self, identifier: &str) -> Result<OperationResult> {
        self.invoke(OperationKind::Validate, identifier).await
    }

    /// Test one account unless a test for it is already outstanding
    pub async fn test_account(&self, identifier: &str) -> Result<OperationResult> {
        self.invoke(OperationKind::Test, identifier).await
    }

    pub async fn invoke(&self, kind: OperationKind, identifier: &str) -> Result<OperationResult> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ConsoleError::validation("identifier is required"));
        }

        let result = {
            let _permit = self.invocations.acquire(kind, identifier).ok_or_else(|| {
                debug!(%kind, identifier, "invocation already in progress");
                ConsoleError::InvocationInProgress {
                    kind,
                    identifier: identifier.to_string(),
                }
            })?;
            self.client.invoke(kind, identifier).await
        };

        self.events.emit(invocation_notice(kind, &result));
        self.events.emit(ConsoleEvent::InvocationCompleted {
            kind,
            result: result.clone(),
        });
        self.events.emit(ConsoleEvent::RefreshNeeded);

        Ok(result)
    }

    pub fn is_invoking(&self, kind: OperationKind, identifier: &str) -> bool {
        self.invocations.is_in_flight(kind, identifier)
    }

    pub fn invocation_guard(&self) -> &InvocationGuard {
        &self.invocations
    }

    // ---- batches ----

    pub async fn run_batch(
        &self,
        kind: OperationKind,
        accounts: &[Account],
    ) -> Result<BatchSummary> {
        self.orchestrator.run_batch(kind, accounts).await
    }

    /// Validate every account currently registered with the backend
    pub async fn validate_all(&self) -> Result<BatchSummary> {
        self.run_over_registered(OperationKind::Validate).await
    }

    /// Test every account currently registered with the backend
    pub async fn test_all(&self) -> Result<BatchSummary> {
        self.run_over_registered(OperationKind::Test).await
    }

    async fn run_over_registered(&self, kind: OperationKind) -> Result<BatchSummary> {
        if let Some(active) = self.orchestrator.active_batch() {
            return Err(ConsoleError::BatchInProgress(active));
        }
        let snapshot = self.backend.snapshot().await?;
        self.orchestrator.run_batch(kind, &snapshot.accounts).await
    }

    pub fn batch_progress(&self) -> Option<BatchProgress> {
        self.orchestrator.progress()
    }

    pub fn active_batch(&self) -> Option<OperationKind> {
        self.orchestrator.active_batch()
    }

    pub fn clear_batch_progress(&self) {
        self.orchestrator.clear_progress();
    }

    // ---- queue status ----

    /// Last successfully polled snapshot
    pub fn queue_status(&self) -> Option<Arc<QueueStatus>> {
        self.poller.latest()
    }

    /// Poll now, outside the regular cadence
    pub async fn refresh_queue_status(&self) -> Option<Arc<QueueStatus>> {
        self.poller.poll().await
    }

    pub fn start_polling(&self, interval: Duration) -> PollerHandle {
        self.poller.spawn(interval)
    }

    pub fn poller(&self) -> &Arc<StatusPoller> {
        &self.poller
    }

    // ---- administration ----

    /// Keys and accounts as the backend currently has them
    pub async fn snapshot(&self) -> Result<ConsoleSnapshot> {
        self.backend.snapshot().await
    }

    pub async fn add_key(&self, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ConsoleError::validation("API key cannot be empty"));
        }
        info!("Adding API key {}", mask_secret(key));
        self.administer("API key added", "failed to add API key", self.backend.add_key(key))
            .await
    }

    pub async fn delete_key(&self, key: &str) -> Result<()> {
        info!("Removing API key {}", mask_secret(key));
        self.administer(
            "API key removed",
            "failed to remove API key",
            self.backend.delete_key(key),
        )
        .await
    }

    pub async fn add_account(&self, account: &NewAccount) -> Result<()> {
        if let Err(e) = account.validate() {
            self.events.emit(ConsoleEvent::error(e.to_string()));
            return Err(e);
        }
        info!("Adding account {}", account.identifier());
        self.administer(
            "account added",
            "failed to add account",
            self.backend.add_account(account),
        )
        .await
    }

    pub async fn delete_account(&self, identifier: &str) -> Result<()> {
        info!("Removing account {}", identifier);
        self.administer(
            "account removed",
            "failed to remove account",
            self.backend.delete_account(identifier),
        )
        .await
    }

    async fn administer<F>(&self, done: &str, failed: &str, call: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        match call.await {
            Ok(()) => {
                self.events.emit(ConsoleEvent::success(done));
                self.events.emit(ConsoleEvent::RefreshNeeded);
                Ok(())
            }
            Err(e) => {
                warn!("{}: {}", failed, e);
                self.events.emit(ConsoleEvent::error(format!("{}: {}", failed, e)));
                Err(e)
            }
        }
    }
}

/// Operator-facing line for one finished invocation
fn invocation_notice(kind: OperationKind, result: &OperationResult) -> ConsoleEvent {
    match (kind, result.success, result.response_time_ms) {
        (OperationKind::Test, true, Some(ms)) => ConsoleEvent::success(format!(
            "{}: API test succeeded ({}ms)",
            result.identifier, ms
        )),
        (_, true, _) => ConsoleEvent::success(format!("{}: {}", result.identifier, result.message)),
        (_, false, _) => ConsoleEvent::error(format!("{}: {}", result.identifier, result.message)),
    }
}
