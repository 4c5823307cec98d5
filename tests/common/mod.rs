//! Shared utilities for adapter integration tests.

use async_trait::async_trait;
use drf_adapter::{RequestPlan, Transport, TransportError, TransportResponse};
use http::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport stub that records every request and replies with queued
/// responses (the stand-in for a live backend).
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<RequestPlan>>,
    responses: Mutex<VecDeque<Value>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the body the next request will receive. Unqueued requests get
    /// `Value::Null` (an empty 200).
    pub fn push_response(&self, body: Value) {
        self.responses.lock().unwrap().push_back(body);
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<RequestPlan> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RequestPlan {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was sent")
            .clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: RequestPlan) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let body = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Value::Null);
        Ok(TransportResponse {
            status: StatusCode::OK,
            body,
        })
    }
}

/// Initialize test logging once; respects RUST_LOG.
#[allow(dead_code)]
pub fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
