//! Account and key shapes as the backend reports them

use crate::utils::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};

/// An account registered with the backend pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Login mobile number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Whether the backend currently holds a session token for the account
    #[serde(default)]
    pub has_token: bool,
    /// Truncated token, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_preview: Option<String>,
}

impl Account {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn with_mobile(mobile: impl Into<String>) -> Self {
        Self {
            mobile: Some(mobile.into()),
            ..Default::default()
        }
    }

    /// The identifier used for remote operations: the email when present,
    /// otherwise the mobile number, trimmed. Blank values count as absent.
    pub fn identifier(&self) -> Option<&str> {
        non_blank(self.email.as_deref()).or_else(|| non_blank(self.mobile.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Payload for registering a new account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    pub password: String,
}

impl NewAccount {
    /// A password and at least one of email or mobile are required
    pub fn validate(&self) -> Result<()> {
        if self.password.is_empty() {
            return Err(ConsoleError::validation("password is required"));
        }
        if self.email.trim().is_empty() && self.mobile.trim().is_empty() {
            return Err(ConsoleError::validation("email or mobile is required"));
        }
        Ok(())
    }

    pub fn identifier(&self) -> &str {
        if self.email.trim().is_empty() {
            self.mobile.trim()
        } else {
            self.email.trim()
        }
    }
}

/// The backend's administrative view: configured API keys and accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSnapshot {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}
