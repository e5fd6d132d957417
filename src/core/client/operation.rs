//! Remote operation client

use super::backend::AccountBackend;
use crate::core::types::{OperationKind, OperationResult};
use crate::utils::error::ConsoleError;
use std::sync::Arc;
use tracing::{Level, debug, info, warn};

/// Runs one validate or test call and normalizes whatever happens into an
/// [`OperationResult`]. It never returns an error.
#[derive(Clone)]
pub struct OperationClient {
    backend: Arc<dyn AccountBackend>,
}

impl OperationClient {
    pub fn new(backend: Arc<dyn AccountBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn AccountBackend> {
        &self.backend
    }

    pub async fn invoke(&self, kind: OperationKind, identifier: &str) -> OperationResult {
        let outcome = match kind {
            OperationKind::Validate => {
                self.backend
                    .validate_account(identifier)
                    .await
                    .map(|response| OperationResult {
                        identifier: identifier.to_string(),
                        success: response.valid,
                        message: response.message,
                        response_time_ms: None,
                    })
            }
            OperationKind::Test => {
                self.backend
                    .test_account(identifier)
                    .await
                    .map(|response| OperationResult {
                        identifier: identifier.to_string(),
                        success: response.success,
                        message: response.message,
                        response_time_ms: response.response_time.filter(|_| response.success),
                    })
            }
        };

        match outcome {
            Ok(result) if result.success => {
                debug!(%kind, identifier, "account operation succeeded");
                result
            }
            Ok(result) => {
                info!(%kind, identifier, message = %result.message, "account operation rejected");
                result
            }
            Err(e) => {
                if failure_level(&e) == Level::WARN {
                    warn!(%kind, identifier, error = %e, "account operation failed");
                } else {
                    info!(%kind, identifier, error = %e, "account operation refused by backend");
                }
                OperationResult::failure(identifier, e.to_string())
            }
        }
    }
}

/// Transport failures are worth a warning; anything the backend answered is not
pub(super) fn failure_level(error: &ConsoleError) -> Level {
    if error.is_transport() {
        Level::WARN
    } else {
        Level::INFO
    }

}
