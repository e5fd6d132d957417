//! Account backend client
//!
//! [`AccountBackend`] is the seam to the remote service: one method per
//! backend endpoint, errors propagated. [`OperationClient`] sits on top of it
//! and folds every validate/test outcome, including transport failures,
//! into an [`OperationResult`](crate::core::types::OperationResult).

mod backend;
mod http;
mod operation;


pub use backend::AccountBackend;
#[cfg(test)]
pub use backend::MockAccountBackend;
pub use http::HttpBackend;
pub use operation::OperationClient;
