//! Type conversions for ConsoleError

use super::types::ConsoleError;

impl From<url::ParseError> for ConsoleError {
    fn from(err: url::ParseError) -> Self {
        ConsoleError::Config(format!("Invalid URL: {}", err))
    }
}

impl ConsoleError {
    /// Classify a transport error from the HTTP client
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ConsoleError::timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            ConsoleError::network(err.to_string())
        } else if err.is_decode() || err.is_body() {
            ConsoleError::parsing(err.to_string())
        } else {
            ConsoleError::HttpClient(err)
        }
    }

    /// Map a non-success HTTP status and the backend's error text
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ConsoleError::Unauthorized(message),
            404 => ConsoleError::NotFound(message),
            _ => ConsoleError::Remote { status, message },
        }
    }
}
