/// HTTP transport for the Tokopay API.
///
/// The client only depends on the [`Transport`] trait, so the reqwest-backed
/// [`HttpTransport`] can be swapped for a test double or a custom stack.
/// Timeouts, TLS and connection pooling are the transport's business.
use std::fmt;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiRequest, Params};
use crate::config::ClientConfig;
use crate::errors::TokopayError;

/// A failed round trip, as seen by the transport.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status, when the server answered at all.
    pub status_code: Option<u16>,
    pub message: String,
    /// Raw response body for non-2xx answers.
    pub body: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: message.into(),
            body: None,
        }
    }

    pub fn with_status(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            message: message.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status_code: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            body: None,
        }
    }
}

/// Executes a built request and returns the parsed JSON body, if any.
///
/// Implementations must report non-2xx answers as [`TransportError`] with
/// `status_code` set, and return `Ok(None)` for an empty body.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn execute(&self, request: &ApiRequest) -> Result<Option<Value>, TransportError>;
}

/// Default transport over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TokopayError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TokopayError::network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (shared pools, custom TLS, proxies).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Option<Value>, TransportError> {
        // Builders pair GET with a query string and POST with a JSON body.
        let builder = match &request.params {
            Params::Query(pairs) => self.client.get(&request.url).query(pairs),
            Params::Json(body) => self.client.post(&request.url).json(body),
        };

        let response = builder.header(ACCEPT, "application/json").send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            "transport.execute method={} url={} status={} body_len={}",
            request.method(),
            request.url,
            status,
            text.len()
        );

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            let message = format!("HTTP {}: {}", status.as_u16(), reason);
            return Err(TransportError::with_status(status.as_u16(), message).with_body(text));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!("transport.execute non_json_body error={}", e);
                Ok(Some(Value::String(text)))
            }
        }
    }
}
