//! Error types for source normalization and entity rehydration
//!
//! Appending a source never fails. These errors belong to the parsing step
//! that turns key-shaped input into canonical records.

use thiserror::Error;

/// Errors raised while turning raw input into canonical records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Key outside the `{url, note}` vocabulary, under the reject policy
    #[error("Unknown source key: {0}")]
    UnknownKey(String),

    /// Value that a text field cannot hold
    #[error("Invalid value for {field}: expected string or null, found {found}")]
    InvalidValue {
        /// Field the value was given for
        field: String,
        /// JSON kind that was found instead
        found: String,
    },

    /// Record that is not a key-value mapping
    #[error("Expected an object, found {0}")]
    NotAnObject(String),

    /// Required entity field missing from a dump
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Names the JSON kind of a value for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
