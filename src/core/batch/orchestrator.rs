//! Sequential batch driver

use crate::core::client::OperationClient;
use crate::core::events::{ConsoleEvent, EventSink};
use crate::core::guard::BatchGuard;
use crate::core::types::{Account, BatchProgress, BatchSummary, OperationKind, OperationResult};
use crate::utils::error::{ConsoleError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

const MISSING_IDENTIFIER: &str = "account has no email or mobile";

/// Drives validate-all / test-all.
///
/// Items are processed strictly in snapshot order with a single call in
/// flight, which caps the load offered to the shared account pool at one
/// request and keeps progress monotonic. There is no cancellation: a run
/// continues until its last item unless the future itself is dropped, in
/// which case the batch guard is still released.
pub struct BatchOrchestrator {
    client: OperationClient,
    guard: BatchGuard,
    progress: RwLock<Option<BatchProgress>>,
    events: Arc<dyn EventSink>,
}

impl BatchOrchestrator {
    pub fn new(client: OperationClient, events: Arc<dyn EventSink>) -> Self {
        Self {
            client,
            guard: BatchGuard::new(),
            progress: RwLock::new(None),
            events,
        }
    }

    /// Run `kind` over `accounts`.
    ///
    /// An empty collection returns an all-zero summary without publishing
    /// anything. While another batch of either kind is running the call is
    /// refused with [`ConsoleError::BatchInProgress`] and nothing changes.
    /// Per-item failures never end the run early.
    pub async fn run_batch(
        &self,
        kind: OperationKind,
        accounts: &[Account],
    ) -> Result<BatchSummary> {
        if accounts.is_empty() {
            debug!(%kind, "empty account collection, nothing to run");
            return Ok(BatchSummary::empty(kind));
        }

        let _permit = match self.guard.enter(kind) {
            Some(permit) => permit,
            None => {
                let active = self.guard.active().unwrap_or(kind);
                info!(%kind, %active, "batch refused, another batch is running");
                return Err(ConsoleError::BatchInProgress(active));
            }
        };

        let snapshot: Vec<Account> = accounts.to_vec();
        let total = snapshot.len();
        let mut progress = BatchProgress::new(kind, total);
        *self.progress.write() = Some(progress.clone());

        info!(%kind, total, "batch started");
        self.events.emit(ConsoleEvent::BatchStarted { kind, total });

        for (index, account) in snapshot.iter().enumerate() {
            let result = match account.identifier() {
                Some(identifier) => self.client.invoke(kind, identifier).await,
                None => OperationResult::failure("", MISSING_IDENTIFIER),
            };

            debug!(
                %kind,
                item = index + 1,
                total,
                identifier = %result.identifier,
                success = result.success,
                "batch item processed"
            );

            progress.record(result);
            *self.progress.write() = Some(progress.clone());
            self.events.emit(ConsoleEvent::Progress(progress.clone()));
            self.events.emit(ConsoleEvent::RefreshNeeded);
        }

        let summary = progress.summary();
        info!(
            %kind,
            succeeded = summary.succeeded,
            total = summary.total,
            "batch finished"
        );

        self.events.emit(ConsoleEvent::success(summary_notice(&summary)));
        self.events.emit(ConsoleEvent::BatchCompleted(summary));
        self.events.emit(ConsoleEvent::RefreshNeeded);

        Ok(summary)
    }

    /// Progress of the current or most recent batch
    pub fn progress(&self) -> Option<BatchProgress> {
        self.progress.read().clone()
    }

    /// Discard the progress of a finished batch. Ignored while one is running.
    pub fn clear_progress(&self) {
        if self.guard.active().is_none() {
            *self.progress.write() = None;
        }
    }

    /// Kind of the running batch, if any
    pub fn active_batch(&self) -> Option<OperationKind> {
        self.guard.active()
    }

    pub fn is_running(&self, kind: OperationKind) -> bool {
        self.guard.is_active(kind)
    }
}

/// Operator-facing line for a finished batch
pub fn summary_notice(summary: &BatchSummary) -> String {
    match summary.kind {
        OperationKind::Validate => format!(
            "validation finished: {}/{} accounts valid",
            summary.succeeded, summary.total
        ),
        OperationKind::Test => format!(
            "API test finished: {}/{} accounts usable",
            summary.succeeded, summary.total
        ),
    }
}
