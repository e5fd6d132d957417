//! Status poller implementation

use crate::core::client::AccountBackend;
use crate::core::events::{ConsoleEvent, EventSink};
use crate::core::types::QueueStatus;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Fetches and stores the latest [`QueueStatus`]
pub struct StatusPoller {
    backend: Arc<dyn AccountBackend>,
    latest: RwLock<Option<Arc<QueueStatus>>>,
    last_updated: RwLock<Option<DateTime<Utc>>>,
    events: Arc<dyn EventSink>,
}

impl StatusPoller {
    pub fn new(backend: Arc<dyn AccountBackend>, events: Arc<dyn EventSink>) -> Self {
        Self {
            backend,
            latest: RwLock::new(None),
            last_updated: RwLock::new(None),
            events,
        }
    }

    /// Fetch once. On failure a warning notice goes out and the previously
    /// stored snapshot is returned untouched.
    pub async fn poll(&self) -> Option<Arc<QueueStatus>> {
        match self.backend.queue_status().await {
            Ok(status) => {
                debug!(
                    available = status.available,
                    in_use = status.in_use,
                    total = status.total,
                    "queue status refreshed"
                );
                let status = Arc::new(status);
                *self.latest.write() = Some(Arc::clone(&status));
                *self.last_updated.write() = Some(Utc::now());
                self.events
                    .emit(ConsoleEvent::QueueStatusUpdated(Arc::clone(&status)));
                Some(status)
            }
            Err(e) => {
                warn!("Failed to fetch queue status: {}", e);
                self.events
                    .emit(ConsoleEvent::warning(format!("queue status unavailable: {}", e)));
                self.latest()
            }
        }
    }

    /// Most recent successfully fetched snapshot
    pub fn latest(&self) -> Option<Arc<QueueStatus>> {
        self.latest.read().clone()
    }

    /// When the stored snapshot was fetched
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        *self.last_updated.read()
    }

    /// Poll immediately, then every `interval`, until the handle is dropped
    pub fn spawn(self: &Arc<Self>, interval: Duration) -> PollerHandle {
        let poller = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                poller.poll().await;
            }
        });
        PollerHandle { handle }
    }
}

/// Background polling task; aborted when dropped
#[derive(Debug)]
pub struct PollerHandle {
    handle: JoinHandle<()>,
}

impl PollerHandle {
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(self) {}
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
