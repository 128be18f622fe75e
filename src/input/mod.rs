//! Structured input extraction from forms and buttons

mod button;
mod form;

pub use button::{extract_button_data, BodyFieldMap, API_BODY_PREFIX};
pub use form::{extract_form, FormInput};
