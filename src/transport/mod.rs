//! Transport seam between the adapter and the network.
//!
//! # Responsibilities
//! - Define the `Transport` trait the adapter dispatches through
//! - Provide the reqwest-backed production implementation
//!
//! # Design Decisions
//! - The adapter stays transport-agnostic: tests inject a recording stub,
//!   production injects `HttpTransport`
//! - No retry or timeout logic here beyond the client's own; resilience is
//!   the host's concern

pub mod client;

use crate::request::RequestPlan;
use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, request, or body-decode failure in the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("unexpected status {status} from {path}")]
    Status { status: StatusCode, path: String },

    /// The configured base URL does not parse.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// What a transport hands back for a completed request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    /// Decoded JSON body; `Value::Null` for empty bodies (e.g. 204).
    pub body: Value,
}

/// Injected request executor.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestPlan) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: RequestPlan) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}

pub use client::HttpTransport;
