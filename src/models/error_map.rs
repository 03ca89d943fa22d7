// Grouped per-field view of validation failures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::validation::ValidationFailure;

/// Insertion-ordered map from field name to the messages reported for that
/// field.
///
/// Keys iterate in the order fields were first seen; messages within a field
/// keep the order the failures were encountered. Serializes as a JSON object
/// with that same key order, so API responses list fields the way the
/// validator reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a message to a field, creating the field entry on first use.
    pub fn append(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for a field, in the order they were appended.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.entries.get(field).map(Vec::as_slice)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Field names in first-insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate fields with their message slices, in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// All messages across all fields, in map order then per-field order.
    pub fn flattened_messages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
    }
}

impl FromIterator<ValidationFailure> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(failures: I) -> Self {
        let mut map = ErrorMap::new();
        map.extend(failures);
        map
    }
}

impl Extend<ValidationFailure> for ErrorMap {
    fn extend<I: IntoIterator<Item = ValidationFailure>>(&mut self, failures: I) {
        for failure in failures {
            self.append(failure.field_name, failure.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_field_on_first_use() {
        let mut map = ErrorMap::new();
        assert!(map.is_empty());
        assert!(!map.contains_field("name"));

        map.append("name", "Required");
        assert_eq!(map.len(), 1);
        assert_eq!(map.messages("name"), Some(&["Required".to_string()][..]));
    }

    #[test]
    fn test_append_preserves_message_order() {
        let mut map = ErrorMap::new();
        map.append("name", "Required");
        map.append("name", "TooLong");

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.messages("name"),
            Some(&["Required".to_string(), "TooLong".to_string()][..])
        );
    }

    #[test]
    fn test_fields_iterate_in_insertion_order() {
        let mut map = ErrorMap::new();
        map.append("name", "Required");
        map.append("age", "MustBePositive");
        map.append("name", "TooLong");

        let fields: Vec<&str> = map.fields().collect();
        assert_eq!(fields, vec!["name", "age"]);
    }

    #[test]
    fn test_flattened_messages_order() {
        let mut map = ErrorMap::new();
        map.append("name", "Required");
        map.append("age", "MustBePositive");
        map.append("name", "TooLong");

        let messages: Vec<&str> = map.flattened_messages().collect();
        assert_eq!(messages, vec!["Required", "TooLong", "MustBePositive"]);
    }

    #[test]
    fn test_from_iterator_groups_by_field() {
        let failures = vec![
            ValidationFailure::new("name", "Required"),
            ValidationFailure::new("age", "MustBePositive"),
            ValidationFailure::new("name", "TooLong"),
        ];

        let map: ErrorMap = failures.into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.messages("name").unwrap().len(), 2);
        assert_eq!(map.messages("age").unwrap().len(), 1);
    }

    #[test]
    fn test_serializes_as_object_preserving_order() {
        let mut map = ErrorMap::new();
        map.append("name", "Required");
        map.append("age", "MustBePositive");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"name":["Required"],"age":["MustBePositive"]}"#);

        let parsed: ErrorMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
