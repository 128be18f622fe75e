//! Declarative extraction of request-body data from button attributes

use super::form::FormInput;
use crate::page::ButtonSource;

/// Recognized namespace for attributes meant to seed a request body
pub const API_BODY_PREFIX: &str = "apiBody";

/// Explicit mapping from attribute name to body field name.
///
/// Attributes with no entry are skipped during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFieldMap {
    entries: Vec<(String, String)>,
}

impl BodyFieldMap {
    /// Build a mapping from explicit attribute/field pairs
    pub fn new<I, A, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, F)>,
        A: Into<String>,
        F: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(attribute, field)| (attribute.into(), field.into()))
                .collect(),
        }
    }

    /// Derive a mapping from prefix-namespaced attribute names.
    ///
    /// Strips the prefix and lower-cases the first character of the
    /// remainder; attributes outside the namespace or with an empty
    /// remainder get no entry.
    pub fn from_prefix<'a, I>(names: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            entries: names
                .into_iter()
                .filter_map(|name| {
                    derive_field_name(name, prefix).map(|field| (name.to_string(), field))
                })
                .collect(),
        }
    }

    /// Field name mapped to the given attribute, if any
    pub fn field_for(&self, attribute: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, field)| field.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extract the mapped attributes of a button into form input
    pub fn extract(&self, button: &dyn ButtonSource) -> FormInput {
        button
            .data_attributes()
            .into_iter()
            .filter_map(|(name, value)| {
                self.field_for(&name).map(|field| (field.to_string(), value))
            })
            .collect()
    }
}

fn derive_field_name(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    let mut field = String::new();
    field.extend(first.to_lowercase());
    field.push_str(chars.as_str());
    Some(field)
}

/// Read the declarative body data attributes of a button.
///
/// Uses the recognized [`API_BODY_PREFIX`] namespace; pure read, no side
/// effects.
pub fn extract_button_data(button: &dyn ButtonSource) -> FormInput {
    let attributes = button.data_attributes();
    let map = BodyFieldMap::from_prefix(
        attributes.iter().map(|(name, _)| name.as_str()),
        API_BODY_PREFIX,
    );
    attributes
        .into_iter()
        .filter_map(|(name, value)| map.field_for(&name).map(|field| (field.to_string(), value)))
        .collect()
}
