//! Remote operations and their normalized outcome

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two per-account remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Log the account in and check its credentials
    Validate,
    /// Issue a real API call through the account
    Test,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Validate => "validate",
            OperationKind::Test => "test",
        }
    }

    /// Backend path of the operation, relative to the base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            OperationKind::Validate => "admin/accounts/validate",
            OperationKind::Test => "admin/accounts/test",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform outcome of one remote operation against one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub identifier: String,
    pub success: bool,
    /// Outcome text from the backend, or the transport diagnostic
    pub message: String,
    /// Backend-reported latency; only set for a successful test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
}

impl OperationResult {
    pub fn success(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            success: true,
            message: message.into(),
            response_time_ms: None,
        }
    }

    pub fn failure(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            success: false,
            message: message.into(),
            response_time_ms: None,
        }
    }

    pub fn with_response_time(mut self, response_time_ms: Option<f64>) -> Self {
        self.response_time_ms = response_time_ms;
        self
    }
}

/// Wire body of the validate request; the test request has the same shape
#[derive(Debug, Clone, Serialize)]
pub struct OperationRequest<'a> {
    pub identifier: &'a str,
}

/// Wire response of `POST admin/accounts/validate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub message: String,
}

/// Wire response of `POST admin/accounts/test`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub response_time: Option<f64>,
}
