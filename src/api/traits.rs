//! Trait abstraction for the HTTP transport to enable mocking in tests

use super::ApiOutcome;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// Trait for the JSON API transport, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Send one request with an optional JSON body and classify the raw
    /// result. Never rejects: transport-level failures resolve to
    /// [`ApiOutcome::Failure`].
    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> ApiOutcome;
}
