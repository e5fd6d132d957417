//! reqwest implementation of the account backend

use super::backend::AccountBackend;
use crate::config::BackendConfig;
use crate::core::types::{
    ConsoleSnapshot, NewAccount, OperationKind, OperationRequest, QueueStatus, TestResponse,
    ValidateResponse,
};
use crate::utils::error::{ConsoleError, Result};
use crate::utils::truncate_string;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

const QUEUE_STATUS_PATH: &str = "admin/queue/status";
const CONFIG_PATH: &str = "admin/config";
const KEYS_PATH: &str = "admin/keys";
const ACCOUNTS_PATH: &str = "admin/accounts";

/// HTTP client for the backend's admin API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::config(format!(
                "base_url cannot carry a path: {}",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.admin_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ConsoleError::config(format!("Invalid admin token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = ClientBuilder::new()
            .timeout(config.timeout_duration())
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| ConsoleError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join `path` onto the base URL, then append `tail` as a single
    /// percent-encoded segment.
    fn endpoint(&self, path: &str, tail: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConsoleError::config("base_url cannot carry a path"))?;
            segments.pop_if_empty();
            segments.extend(path.split('/'));
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ConsoleError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ConsoleError::from_status(
            status.as_u16(),
            error_detail(status, &body),
        ))
    }

    async fn post_operation<T: DeserializeOwned>(
        &self,
        kind: OperationKind,
        identifier: &str,
    ) -> Result<T> {
        let url = self.endpoint(kind.endpoint(), None)?;
        debug!(%kind, identifier, "sending account operation");

        let request = self.client.post(url).json(&OperationRequest { identifier });
        let response = self.send(request).await?;
        read_json(response).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Human-readable reason for a non-success response
fn error_detail(status: StatusCode, body: &str) -> String {
    let structured = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.message))
        .filter(|m| !m.trim().is_empty());

    match structured {
        Some(message) => message,
        None if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        None => truncate_string(body.trim(), 200),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await.map_err(ConsoleError::from_transport)?;
    serde_json::from_str(&text)
        .map_err(|e| ConsoleError::parsing(format!("Failed to parse backend response: {}", e)))
}

#[async_trait]
impl AccountBackend for HttpBackend {
    async fn validate_account(&self, identifier: &str) -> Result<ValidateResponse> {
        self.post_operation(OperationKind::Validate, identifier).await
    }

    async fn test_account(&self, identifier: &str) -> Result<TestResponse> {
        self.post_operation(OperationKind::Test, identifier).await
    }

    async fn queue_status(&self) -> Result<QueueStatus> {
        let url = self.endpoint(QUEUE_STATUS_PATH, None)?;
        let response = self.send(self.client.get(url)).await?;
        read_json(response).await
    }

    async fn snapshot(&self) -> Result<ConsoleSnapshot> {
        let url = self.endpoint(CONFIG_PATH, None)?;
        let response = self.send(self.client.get(url)).await?;
        read_json(response).await
    }

    async fn add_key(&self, key: &str) -> Result<()> {
        let url = self.endpoint(KEYS_PATH, None)?;
        let body = serde_json::json!({ "key": key });
        self.send(self.client.post(url).json(&body)).await?;
        Ok(())
    }

    async fn delete_key(&self, key: &str) -> Result<()> {
        let url = self.endpoint(KEYS_PATH, Some(key))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn add_account(&self, account: &NewAccount) -> Result<()> {
        let url = self.endpoint(ACCOUNTS_PATH, None)?;
        self.send(self.client.post(url).json(account)).await?;
        Ok(())
    }

    async fn delete_account(&self, identifier: &str) -> Result<()> {
        let url = self.endpoint(ACCOUNTS_PATH, Some(identifier))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
