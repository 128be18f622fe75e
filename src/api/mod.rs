//! JSON API boundary: request sending and outcome classification

mod client;
mod traits;

pub use client::HttpApiClient;
pub use traits::ApiTransport;

#[cfg(test)]
pub use traits::MockApiTransport;

use crate::error::SubmitError;
use serde_json::Value;

/// Buffered snapshot of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status code denotes success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the buffered body as JSON
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }
}

/// Why a request did not produce a success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// The server answered with a non-success status
    Status(ApiResponse),
    /// The request never reached or returned from the server
    Transport(String),
}

/// Classified result of one API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Success(ApiResponse),
    Failure(ApiFailure),
}

impl ApiOutcome {
    /// Passthrough for success; converts failure into the standard error
    /// channel so downstream stages can short-circuit with `?`.
    pub fn reject_on_failure(self) -> Result<ApiResponse, SubmitError> {
        match self {
            ApiOutcome::Success(response) => Ok(response),
            ApiOutcome::Failure(ApiFailure::Status(response)) => Err(SubmitError::Api(response)),
            ApiOutcome::Failure(ApiFailure::Transport(message)) => {
                Err(SubmitError::Transport(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, status_text: &str, body: &[u8]) -> ApiResponse {
        ApiResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(response(200, "OK", b"").is_success());
        assert!(response(299, "OK", b"").is_success());
        assert!(!response(199, "Early Hints", b"").is_success());
        assert!(!response(300, "Multiple Choices", b"").is_success());
        assert!(!response(422, "Unprocessable Entity", b"").is_success());
    }

    #[test]
    fn test_json_parses_buffered_body() {
        let body = response(200, "OK", br#"{"manageUrl":"/sites/a"}"#);
        let value = body.json().unwrap();
        assert_eq!(value["manageUrl"], "/sites/a");
    }

    #[test]
    fn test_json_fails_on_unparseable_body() {
        assert!(response(500, "Internal Server Error", b"<html>").json().is_err());
    }

    #[test]
    fn test_reject_on_failure_passes_success_through() {
        let outcome = ApiOutcome::Success(response(200, "OK", b"{}"));
        let passed = outcome.reject_on_failure().unwrap();
        assert_eq!(passed.status, 200);
    }

    #[test]
    fn test_reject_on_failure_maps_status_failure() {
        let outcome = ApiOutcome::Failure(ApiFailure::Status(response(
            422,
            "Unprocessable Entity",
            b"{}",
        )));
        match outcome.reject_on_failure() {
            Err(SubmitError::Api(r)) => assert_eq!(r.status, 422),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_reject_on_failure_maps_transport_failure() {
        let outcome = ApiOutcome::Failure(ApiFailure::Transport("connection refused".to_string()));
        match outcome.reject_on_failure() {
            Err(SubmitError::Transport(m)) => assert_eq!(m, "connection refused"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
