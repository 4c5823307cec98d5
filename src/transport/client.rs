//! reqwest-backed transport.

use crate::config::schema::HttpConfig;
use crate::request::RequestPlan;
use crate::transport::{Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Sends plans over HTTP against a configured base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for the given base URL (scheme + host, optionally
    /// a path prefix).
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, TransportError> {
        let parsed = Url::parse(&config.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestPlan) -> Result<TransportResponse, TransportError> {
        let url = self.absolute(&request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self.client.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                path: request.path,
            });
        }

        // DELETE commonly answers 204 with an empty body
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(TransportResponse { status, body })
    }
}
