//! Source records (the Popolo `sources` property)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SourceField;

/// A single source substantiating an entity's data
///
/// Both fields are optional at this layer. Records appended through
/// [`Sources::add`](crate::Sources::add) always carry a URL, but records
/// rehydrated in bulk are kept exactly as provided, missing URL included.
/// Absent fields are omitted from the serialized form, never written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    /// Locator of the supporting document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Annotation such as "press release" or "official bio page"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Source {
    /// Create a source citing `url`, without a note
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            note: None,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Get the URL, if present
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Get the note, if present
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Get a field by key
    pub fn get(&self, field: SourceField) -> Option<&str> {
        match field {
            SourceField::Url => self.url(),
            SourceField::Note => self.note(),
        }
    }

    /// Set or clear a field by key
    pub fn set(&mut self, field: SourceField, value: Option<String>) {
        match field {
            SourceField::Url => self.url = value,
            SourceField::Note => self.note = value,
        }
    }

    /// Build the dumped `{url, note}` object, omitting absent fields
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for field in SourceField::ALL {
            if let Some(value) = self.get(field) {
                map.insert(field.as_str().to_string(), Value::String(value.to_string()));
            }
        }
        Value::Object(map)
    }
}

/// True when `value` is absent or contains no non-whitespace characters
///
/// Whitespace follows the Unicode `White_Space` property, so a URL made only
/// of non-breaking spaces is blank too.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_creation() {
        let source = Source::new("http://example.org").with_note("press release");
        assert_eq!(source.url(), Some("http://example.org"));
        assert_eq!(source.note(), Some("press release"));
    }

    #[test]
    fn test_to_value_omits_absent_note() {
        let source = Source::new("http://example.org");
        assert_eq!(source.to_value(), json!({"url": "http://example.org"}));
    }

    #[test]
    fn test_to_value_keys_sorted_when_serialized() {
        let source = Source::new("http://a").with_note("bio");
        assert_eq!(
            source.to_value().to_string(),
            r#"{"note":"bio","url":"http://a"}"#
        );
    }

    #[test]
    fn test_to_value_empty_record() {
        assert_eq!(Source::default().to_value(), json!({}));
    }

    #[test]
    fn test_serde_matches_to_value() {
        let source = Source::new("http://example.org").with_note("bio");
        assert_eq!(serde_json::to_value(&source).unwrap(), source.to_value());

        let bare = Source::new("http://example.org");
        assert_eq!(serde_json::to_value(&bare).unwrap(), bare.to_value());
    }

    #[test]
    fn test_get_and_set_by_field() {
        let mut source = Source::default();
        source.set(SourceField::Note, Some("n".to_string()));
        assert_eq!(source.get(SourceField::Note), Some("n"));
        assert_eq!(source.get(SourceField::Url), None);

        source.set(SourceField::Note, None);
        assert_eq!(source, Source::default());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t\n")));
        assert!(is_blank(Some("\u{00a0}")));
        assert!(!is_blank(Some("http://a")));
        assert!(!is_blank(Some(" x ")));
    }
}
