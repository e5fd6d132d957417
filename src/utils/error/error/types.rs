//! Error types for the console

use crate::core::types::OperationKind;
use thiserror::Error;

/// Result type alias for the console
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for the console
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors that could not be classified further
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// The response body could not be decoded
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// The backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// Local input validation failed before any call was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend rejected the admin credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The addressed key or account does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The same operation is already outstanding for this account
    #[error("A {kind} of {identifier} is already in progress")]
    InvocationInProgress {
        kind: OperationKind,
        identifier: String,
    },

    /// A batch of either kind is already running
    #[error("A {0} batch is already in progress")]
    BatchInProgress(OperationKind),
}
