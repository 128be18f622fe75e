//! Form input captured at submission time

use crate::page::FormSource;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Field name to field value mapping, built fresh on every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: HashMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a JSON object with one string value per field
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect()
    }
}

impl FromIterator<(String, String)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Read every named field value currently present in the form.
///
/// No validation, no coercion beyond raw string values.
pub fn extract_form(form: &dyn FormSource) -> FormInput {
    form.fields().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StaticForm;

    #[test]
    fn test_extract_form_reads_all_fields() {
        let form = StaticForm::new()
            .with_field("domain", "a")
            .with_field("path", "/x");
        let input = extract_form(&form);
        assert_eq!(input.len(), 2);
        assert_eq!(input.get("domain"), Some("a"));
        assert_eq!(input.get("path"), Some("/x"));
    }

    #[test]
    fn test_extract_form_empty_form() {
        let form = StaticForm::new();
        let input = extract_form(&form);
        assert!(input.is_empty());
    }

    #[test]
    fn test_extract_form_keeps_raw_values() {
        let form = StaticForm::new().with_field("path", "  /spaced ");
        let input = extract_form(&form);
        assert_eq!(input.get("path"), Some("  /spaced "));
    }

    #[test]
    fn test_last_value_wins_for_duplicate_names() {
        let form = StaticForm::new()
            .with_field("domain", "first")
            .with_field("domain", "second");
        let input = extract_form(&form);
        assert_eq!(input.get("domain"), Some("second"));
    }

    #[test]
    fn test_to_json_map_holds_string_values() {
        let mut input = FormInput::new();
        input.insert("domain", "a");
        let map = input.to_json_map();
        assert_eq!(map.get("domain"), Some(&Value::String("a".to_string())));
    }

    #[test]
    fn test_get_missing_field_is_none() {
        let input = FormInput::new();
        assert_eq!(input.get("missing"), None);
    }
}
