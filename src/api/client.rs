//! HTTP client for the JSON API boundary

use super::{ApiFailure, ApiOutcome, ApiResponse, ApiTransport};
use crate::config::PipelineConfig;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// Client sending JSON requests over HTTP.
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl HttpApiClient {
    /// Create a client with default settings
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Resolve relative request paths against the given base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build a client honoring the host's persisted configuration
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.api_base_url.clone(),
        })
    }

    fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if url.starts_with('/') => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url.to_string(),
        }
    }
}

impl Default for HttpApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiTransport for HttpApiClient {
    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> ApiOutcome {
        let url = self.resolve_url(url);
        let mut request = self.http.request(method, &url);
        if let Some(body) = &body {
            // Serializes the body and sets the JSON content type
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return ApiOutcome::Failure(ApiFailure::Transport(err.to_string())),
        };

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => return ApiOutcome::Failure(ApiFailure::Transport(err.to_string())),
        };

        let response = ApiResponse {
            status: status.as_u16(),
            status_text,
            body,
        };
        if response.is_success() {
            ApiOutcome::Success(response)
        } else {
            ApiOutcome::Failure(ApiFailure::Status(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_joins_relative_paths() {
        let client = HttpApiClient::new().with_base_url("https://api.example.com");
        assert_eq!(
            client.resolve_url("/api/sites"),
            "https://api.example.com/api/sites"
        );
    }

    #[test]
    fn test_resolve_url_trims_trailing_base_slash() {
        let client = HttpApiClient::new().with_base_url("https://api.example.com/");
        assert_eq!(
            client.resolve_url("/api/sites"),
            "https://api.example.com/api/sites"
        );
    }

    #[test]
    fn test_resolve_url_keeps_absolute_urls() {
        let client = HttpApiClient::new().with_base_url("https://api.example.com");
        assert_eq!(
            client.resolve_url("https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_resolve_url_without_base_is_passthrough() {
        let client = HttpApiClient::new();
        assert_eq!(client.resolve_url("/api/sites"), "/api/sites");
    }

    #[test]
    fn test_from_config_applies_base_url() {
        let config = PipelineConfig {
            api_base_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        };
        let client = HttpApiClient::from_config(&config).unwrap();
        assert_eq!(
            client.resolve_url("/api/sites"),
            "https://api.example.com/api/sites"
        );
    }

    #[test]
    fn test_from_config_with_defaults() {
        let client = HttpApiClient::from_config(&PipelineConfig::default()).unwrap();
        assert_eq!(client.resolve_url("/api/sites"), "/api/sites");
    }
}
