//! Helper functions for creating specific error types

use super::types::ConsoleError;

/// Helper functions for creating specific errors
impl ConsoleError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn remote<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Whether the error happened below the application protocol: the request
    /// never reached the backend or its answer could not be read.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpClient(_)
                | Self::Network(_)
                | Self::Timeout(_)
                | Self::Parsing(_)
                | Self::Serialization(_)
        )
    }
}
