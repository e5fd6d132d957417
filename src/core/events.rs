//! Notifications emitted to whoever renders the console
//!
//! The orchestrator, the per-item invocations and the status poller all
//! report through an [`EventSink`]. [`EventBus`] is the broadcast-backed
//! implementation; tests can plug in a recording sink instead.

use super::types::{BatchProgress, BatchSummary, OperationKind, OperationResult, QueueStatus};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Severity of an operator-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    /// A batch took its snapshot and is about to process `total` accounts
    BatchStarted { kind: OperationKind, total: usize },
    /// One more account of the running batch has been processed
    Progress(BatchProgress),
    /// The running batch processed its last account
    BatchCompleted(BatchSummary),
    /// A single-account invocation finished and its guard was released
    InvocationCompleted {
        kind: OperationKind,
        result: OperationResult,
    },
    /// The status poller stored a new snapshot
    QueueStatusUpdated(Arc<QueueStatus>),
    /// Human-readable outcome for the operator
    Notice { level: NoticeLevel, text: String },
    /// Server-side account state may have changed; re-read it
    RefreshNeeded,
}

impl ConsoleEvent {
    pub fn success(text: impl Into<String>) -> Self {
        ConsoleEvent::Notice {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        ConsoleEvent::Notice {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        ConsoleEvent::Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Receiver of console notifications
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ConsoleEvent);
}

/// Sink that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: ConsoleEvent) {}
}

/// Broadcasts events to any number of subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ConsoleEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to console events
    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl EventSink for EventBus {
    fn emit(&self, event: ConsoleEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }
}
