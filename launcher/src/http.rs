//! HTTP transport used by the provisioner, renamer and health prober
//!
//! Everything talks to Odoo through [`HttpClient`] so the deployment flow can
//! be exercised against a scripted client in tests.

use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failure: nothing usable came back from the server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Other(e.to_string())
        }
    }
}

/// Status code and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parse the body as JSON, `None` if it is not valid JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Minimal request surface the launcher needs.
pub trait HttpClient: Send + Sync {
    /// POST `body` as JSON and return the reply without interpreting it.
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> impl Future<Output = Result<HttpReply, TransportError>> + Send;

    /// GET `url`. Redirects are returned as-is, never followed.
    fn get(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<HttpReply, TransportError>> + Send;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        let resp = self
            .client
            .post(url)
            .timeout(timeout)
            .json(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpReply { status, body })
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply, TransportError> {
        let resp = self.client.get(url).timeout(timeout).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpReply { status, body })
    }
}
