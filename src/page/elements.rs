//! Value-backed page elements for hosts that assemble input directly

use super::traits::{ButtonSource, FormSource};

/// Form element backed by an owned list of field values.
#[derive(Debug, Clone, Default)]
pub struct StaticForm {
    fields: Vec<(String, String)>,
}

impl StaticForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named field value
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }
}

impl FormSource for StaticForm {
    fn fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }
}

/// Button element backed by an owned list of data attributes.
#[derive(Debug, Clone, Default)]
pub struct StaticButton {
    attributes: Vec<(String, String)>,
}

impl StaticButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a data attribute
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }
}

impl ButtonSource for StaticButton {
    fn data_attributes(&self) -> Vec<(String, String)> {
        self.attributes.clone()
    }
}
