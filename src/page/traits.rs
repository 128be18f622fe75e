//! Trait abstraction for the host page boundary to enable mocking in tests

use async_trait::async_trait;
use serde_json::Value;
use std::io;

/// A triggering control (submit button or action button) the gate can
/// disable while a submission is in flight.
#[cfg_attr(test, mockall::automock)]
pub trait Control: Send + Sync {
    /// Toggle whether the control accepts user interaction
    fn set_enabled(&self, enabled: bool);
}

/// Error display surface of the host page.
#[cfg_attr(test, mockall::automock)]
pub trait StatusDisplay: Send + Sync {
    /// Show the given string as the current error
    fn show_error(&self, message: &str);

    /// Clear/hide the current error
    fn clear_error(&self);
}

/// Host-defined success continuation (redirect, view swap, content render).
#[cfg_attr(test, mockall::automock)]
pub trait SuccessHandler: Send + Sync {
    /// Invoked with the parsed success body; `Value::Null` for bodyless responses
    fn on_success(&self, body: Value);
}

/// Yes/no confirmation shown before destructive actions run.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// A submit-capable element exposing named field values.
#[cfg_attr(test, mockall::automock)]
pub trait FormSource: Send + Sync {
    /// The current key/value contents of the form
    fn fields(&self) -> Vec<(String, String)>;
}

/// A clickable element exposing a flat set of string data attributes.
#[cfg_attr(test, mockall::automock)]
pub trait ButtonSource: Send + Sync {
    fn data_attributes(&self) -> Vec<(String, String)>;
}

/// A file-input-like element exposing zero-or-one selected files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Metadata of the selected file, if any
    fn selected(&self) -> Option<SelectedFile>;

    /// Read the selected file's bytes; only called when a file is selected
    async fn read(&self) -> io::Result<Vec<u8>>;
}

/// Metadata for a file selected in the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// MIME type when the host knows it
    pub content_type: Option<String>,
}
