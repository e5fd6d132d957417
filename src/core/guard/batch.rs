//! Batch mutual-exclusion guard

use crate::core::types::OperationKind;
use parking_lot::Mutex;

#[derive(Debug, Default, Clone, Copy)]
struct BatchFlags {
    validate_all: bool,
    test_all: bool,
}

impl BatchFlags {
    fn flag_mut(&mut self, kind: OperationKind) -> &mut bool {
        match kind {
            OperationKind::Validate => &mut self.validate_all,
            OperationKind::Test => &mut self.test_all,
        }
    }

    fn active(&self) -> Option<OperationKind> {
        if self.validate_all {
            Some(OperationKind::Validate)
        } else if self.test_all {
            Some(OperationKind::Test)
        } else {
            None
        }
    }
}

/// Allows at most one batch, of either kind, at a time
#[derive(Debug, Default)]
pub struct BatchGuard {
    flags: Mutex<BatchFlags>,
}

impl BatchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the "all in flight" flag for `kind`. Fails without touching any
    /// state while a batch of either kind is active.
    pub fn begin(&self, kind: OperationKind) -> bool {
        let mut flags = self.flags.lock();
        if flags.active().is_some() {
            return false;
        }
        *flags.flag_mut(kind) = true;
        true
    }

    pub fn end(&self, kind: OperationKind) {
        *self.flags.lock().flag_mut(kind) = false;
    }

    /// [`begin`](Self::begin) returning a permit that ends the batch on drop
    pub fn enter(&self, kind: OperationKind) -> Option<BatchPermit<'_>> {
        self.begin(kind).then(|| BatchPermit { guard: self, kind })
    }

    pub fn is_active(&self, kind: OperationKind) -> bool {
        *self.flags.lock().flag_mut(kind)
    }

    /// The kind of the running batch, if any
    pub fn active(&self) -> Option<OperationKind> {
        self.flags.lock().active()
    }
}

/// Held for the whole duration of a batch run
#[derive(Debug)]
pub struct BatchPermit<'a> {
    guard: &'a BatchGuard,
    kind: OperationKind,
}

impl BatchPermit<'_> {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}

impl Drop for BatchPermit<'_> {
    fn drop(&mut self) {
        self.guard.end(self.kind);
    }
}
