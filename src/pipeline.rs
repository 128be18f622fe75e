//! End-to-end submission orchestration
//!
//! Composes the gate, input extraction, file resolution, the API transport
//! and error normalization into one result-typed driver. The gate permit is
//! held for the whole run, so the triggering control returns to idle exactly
//! once on every exit path, including early abandonment.

use crate::api::{ApiResponse, ApiTransport};
use crate::error::{normalize, SubmitError};
use crate::file::{self, FileResult};
use crate::gate::ActionGate;
use crate::input::{extract_button_data, extract_form, BodyFieldMap, FormInput};
use crate::page::{
    ButtonSource, ConfirmPrompt, FileSource, FormSource, StatusDisplay, SuccessHandler,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Body field carrying the encoded file payload
const DATA_URL_FIELD: &str = "dataUrl";

/// Target endpoint for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub url: String,
}

impl Endpoint {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }
}

/// What to do when a required file is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoFilePolicy {
    /// Abandon the run without showing a message
    SilentAbort,
    /// Display the normalized message
    ShowError,
}

/// Whether a flow needs a file resolved before sending.
pub enum FileRequirement<'a> {
    NotRequired,
    Required {
        source: &'a dyn FileSource,
        policy: NoFilePolicy,
    },
}

/// Terminal state of one triggered submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trigger arrived while a run was in flight and was ignored
    Ignored,
    /// The run stopped before sending, without a message
    Abandoned,
    /// The success continuation ran
    Completed,
    /// The normalized message was displayed
    Failed(String),
}

/// Submission pipeline with host collaborators injected at construction.
///
/// One pipeline serves any number of controls; single-flight submission is
/// per [`ActionGate`], so two distinct controls run independently.
pub struct SubmissionPipeline {
    api: Arc<dyn ApiTransport>,
    display: Arc<dyn StatusDisplay>,
    success: Arc<dyn SuccessHandler>,
}

impl SubmissionPipeline {
    pub fn new(
        api: Arc<dyn ApiTransport>,
        display: Arc<dyn StatusDisplay>,
        success: Arc<dyn SuccessHandler>,
    ) -> Self {
        Self {
            api,
            display,
            success,
        }
    }

    /// Submit a form's current field values.
    pub async fn submit_form(
        &self,
        gate: &ActionGate,
        form: &dyn FormSource,
        endpoint: Endpoint,
        file: FileRequirement<'_>,
    ) -> SubmitOutcome {
        let Some(permit) = gate.try_acquire() else {
            return SubmitOutcome::Ignored;
        };
        let input = extract_form(form);
        let outcome = self.run(input, endpoint, file).await;
        permit.release();
        outcome
    }

    /// Submit a button's declarative body data.
    ///
    /// With no explicit map the recognized attribute namespace seeds the
    /// body (see [`extract_button_data`]).
    pub async fn submit_button(
        &self,
        gate: &ActionGate,
        button: &dyn ButtonSource,
        map: Option<&BodyFieldMap>,
        endpoint: Endpoint,
    ) -> SubmitOutcome {
        let Some(permit) = gate.try_acquire() else {
            return SubmitOutcome::Ignored;
        };
        let input = extract_input(button, map);
        let outcome = self
            .run(input, endpoint, FileRequirement::NotRequired)
            .await;
        permit.release();
        outcome
    }

    /// Submit a button's data after a host confirmation.
    ///
    /// A declined confirmation abandons the run before any work happens;
    /// the gate is still released.
    pub async fn submit_button_confirmed(
        &self,
        gate: &ActionGate,
        button: &dyn ButtonSource,
        map: Option<&BodyFieldMap>,
        endpoint: Endpoint,
        prompt: &dyn ConfirmPrompt,
        question: &str,
    ) -> SubmitOutcome {
        let Some(permit) = gate.try_acquire() else {
            return SubmitOutcome::Ignored;
        };
        if !prompt.confirm(question) {
            tracing::debug!("confirmation declined, abandoning");
            permit.release();
            return SubmitOutcome::Abandoned;
        }
        let input = extract_input(button, map);
        let outcome = self
            .run(input, endpoint, FileRequirement::NotRequired)
            .await;
        permit.release();
        outcome
    }

    async fn run(
        &self,
        input: FormInput,
        endpoint: Endpoint,
        file: FileRequirement<'_>,
    ) -> SubmitOutcome {
        self.display.clear_error();
        let silent_on_missing_file = matches!(
            file,
            FileRequirement::Required {
                policy: NoFilePolicy::SilentAbort,
                ..
            }
        );

        match self.execute(input, endpoint, file).await {
            Ok(body) => {
                self.success.on_success(body);
                SubmitOutcome::Completed
            }
            Err(SubmitError::NoFileSelected) if silent_on_missing_file => {
                tracing::debug!("no file selected, abandoning silently");
                SubmitOutcome::Abandoned
            }
            Err(error) => {
                let message = normalize(&error);
                self.display.show_error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    async fn execute(
        &self,
        input: FormInput,
        endpoint: Endpoint,
        file: FileRequirement<'_>,
    ) -> Result<Value, SubmitError> {
        let resolved = match file {
            FileRequirement::NotRequired => None,
            FileRequirement::Required { source, .. } => Some(file::resolve(source).await?),
        };

        let payload = build_payload(&input, resolved.as_ref());
        let body = request_body(&endpoint.method, payload);
        let outcome = self.api.send(endpoint.method, &endpoint.url, body).await;
        let response = outcome.reject_on_failure()?;
        parse_success_body(&response)
    }
}

fn extract_input(button: &dyn ButtonSource, map: Option<&BodyFieldMap>) -> FormInput {
    match map {
        Some(map) => map.extract(button),
        None => extract_button_data(button),
    }
}

/// Assemble the request payload from captured input plus the resolved file
fn build_payload(input: &FormInput, file: Option<&FileResult>) -> Value {
    let mut payload = input.to_json_map();
    if let Some(file) = file {
        payload.insert(
            DATA_URL_FIELD.to_string(),
            Value::String(file.data_url.clone()),
        );
    }
    Value::Object(payload)
}

/// GET and HEAD probes carry no body
fn request_body(method: &Method, payload: Value) -> Option<Value> {
    if *method == Method::GET || *method == Method::HEAD {
        None
    } else {
        Some(payload)
    }
}

/// Parse the success body; bodyless responses surface as JSON null
fn parse_success_body(response: &ApiResponse) -> Result<Value, SubmitError> {
    if response.body.is_empty() {
        return Ok(Value::Null);
    }
    response
        .json()
        .map_err(|err| SubmitError::Message(format!("Failed to parse response body: {err}")))
}
