//! Batch progress accounting

use super::operation::{OperationKind, OperationResult};
use serde::Serialize;

/// Progress of one batch run.
///
/// `results.len() == current` holds after every `record`, and `total` is
/// fixed when the run starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchProgress {
    pub kind: OperationKind,
    pub current: usize,
    pub total: usize,
    pub results: Vec<OperationResult>,
}

impl BatchProgress {
    pub fn new(kind: OperationKind, total: usize) -> Self {
        Self {
            kind,
            current: 0,
            total,
            results: Vec::with_capacity(total),
        }
    }

    pub(crate) fn record(&mut self, result: OperationResult) {
        self.results.push(result);
        self.current = self.results.len();
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Completed share in percent, 0 for an empty run
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 * 100.0 / self.total as f64
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            kind: self.kind,
            succeeded: self.succeeded(),
            total: self.total,
        }
    }
}

/// Aggregate outcome of a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub kind: OperationKind,
    pub succeeded: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn empty(kind: OperationKind) -> Self {
        Self {
            kind,
            succeeded: 0,
            total: 0,
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}
