//! Per-item invocation guard

use crate::core::types::OperationKind;
use dashmap::DashSet;

/// Tracks which (kind, identifier) pairs have a call outstanding
#[derive(Debug, Default)]
pub struct InvocationGuard {
    validating: DashSet<String>,
    testing: DashSet<String>,
}

impl InvocationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn in_flight_set(&self, kind: OperationKind) -> &DashSet<String> {
        match kind {
            OperationKind::Validate => &self.validating,
            OperationKind::Test => &self.testing,
        }
    }

    /// Mark the pair outstanding. Returns false, changing nothing, when it
    /// already is.
    pub fn try_acquire(&self, kind: OperationKind, identifier: &str) -> bool {
        self.in_flight_set(kind).insert(identifier.to_string())
    }

    /// Clear the outstanding mark. Releasing a pair that is not held is a no-op.
    pub fn release(&self, kind: OperationKind, identifier: &str) {
        self.in_flight_set(kind).remove(identifier);
    }

    /// [`try_acquire`](Self::try_acquire) returning a permit that releases on drop
    pub fn acquire(&self, kind: OperationKind, identifier: &str) -> Option<InvocationPermit<'_>> {
        self.try_acquire(kind, identifier)
            .then(|| InvocationPermit {
                guard: self,
                kind,
                identifier: identifier.to_string(),
            })
    }

    pub fn is_in_flight(&self, kind: OperationKind, identifier: &str) -> bool {
        self.in_flight_set(kind).contains(identifier)
    }

    /// Identifiers with an outstanding call of `kind`, sorted
    pub fn in_flight(&self, kind: OperationKind) -> Vec<String> {
        let mut ids: Vec<String> = self
            .in_flight_set(kind)
            .iter()
            .map(|id| id.key().clone())
            .collect();
        ids.sort();
        ids
    }
}

/// Held while one invocation is outstanding
#[derive(Debug)]
pub struct InvocationPermit<'a> {
    guard: &'a InvocationGuard,
    kind: OperationKind,
    identifier: String,
}

impl InvocationPermit<'_> {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Drop for InvocationPermit<'_> {
    fn drop(&mut self) {
        self.guard.release(self.kind, &self.identifier);
    }
}
