//! Formgate - one-shot form submission for JSON HTTP APIs
//!
//! A client-side toolkit that submits a form (optionally carrying a
//! user-selected file encoded as a data URL) to a JSON API exactly once per
//! user action, invokes a host-defined success continuation, renders any
//! failure as a single human-readable message, and re-enables the
//! triggering control exactly once no matter which stage failed.
//!
//! Hosts wire their page elements in through the narrow traits in [`page`],
//! construct a [`pipeline::SubmissionPipeline`] with an API transport and
//! display/success collaborators, and give each triggering control its own
//! [`gate::ActionGate`].

pub mod api;
pub mod config;
pub mod error;
pub mod file;
pub mod gate;
pub mod input;
pub mod logging;
pub mod page;
pub mod pipeline;

pub use api::{ApiFailure, ApiOutcome, ApiResponse, ApiTransport, HttpApiClient};
pub use config::PipelineConfig;
pub use error::{normalize, SubmitError};
pub use file::{decode_data_url, FileResult, LocalFileSource};
pub use gate::{ActionGate, GatePermit};
pub use input::{extract_button_data, extract_form, BodyFieldMap, FormInput, API_BODY_PREFIX};
pub use page::{
    ButtonSource, ConfirmPrompt, Control, FileSource, FormSource, SelectedFile, StaticButton,
    StaticForm, StatusDisplay, SuccessHandler,
};
pub use pipeline::{Endpoint, FileRequirement, NoFilePolicy, SubmissionPipeline, SubmitOutcome};
