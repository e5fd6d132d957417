//! In-memory, process-local concurrency guards
//!
//! Two independent primitives:
//!
//! - [`InvocationGuard`] refuses a second validate (or test) for the same
//!   identifier while the first is outstanding.
//! - [`BatchGuard`] lets at most one batch of either kind run at a time.
//!
//! Both hand out RAII permits so release happens on every exit path,
//! including a dropped future.

mod batch;
mod invocation;


pub use batch::{BatchGuard, BatchPermit};
pub use invocation::{InvocationGuard, InvocationPermit};
