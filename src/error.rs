//! Failure taxonomy and single-point display normalization

use crate::api::ApiResponse;
use serde_json::Value;
use thiserror::Error;

/// Generic fallback shown when no better message can be derived
const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Every way a submission can fail before reaching its success continuation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The flow required a file but none was selected
    #[error("No file selected")]
    NoFileSelected,

    /// Reading the selected file failed, carrying the underlying cause
    #[error("Failed to read file: {0}")]
    FileRead(String),

    /// The request never reached or returned from the server
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Request failed: {} {}", .0.status, .0.status_text)]
    Api(ApiResponse),

    /// A message-shaped failure from any stage
    #[error("{0}")]
    Message(String),

    /// A failure with no recognizable shape
    #[error("Something went wrong")]
    Unknown,
}

/// Convert any failure into exactly one non-empty display string.
///
/// This is the last line of defense before showing the user something:
/// every branch returns a message, normalization itself cannot fail.
pub fn normalize(error: &SubmitError) -> String {
    let message = match error {
        SubmitError::Message(message) => message.clone(),
        SubmitError::Api(response) => normalize_response(response),
        SubmitError::NoFileSelected | SubmitError::FileRead(_) | SubmitError::Transport(_) => {
            error.to_string()
        }
        SubmitError::Unknown => {
            tracing::warn!("unhandled failure shape");
            FALLBACK_MESSAGE.to_string()
        }
    };
    if message.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

/// Derive a message from a non-success response body.
///
/// A parseable JSON body with a string `error` field wins; everything else
/// falls back to a generic template carrying the status text.
fn normalize_response(response: &ApiResponse) -> String {
    match response.json() {
        Ok(body) => {
            if let Some(message) = body.get("error").and_then(Value::as_str) {
                return message.to_string();
            }
            tracing::warn!(status = response.status, "unhandled error in response");
            format!("{}: {}", FALLBACK_MESSAGE, response.status_text)
        }
        Err(err) => {
            tracing::warn!(status = response.status, %err, "failed reading json from response");
            format!("{}: {}", FALLBACK_MESSAGE, response.status_text)
        }
    }
}
