//! Key normalization for bulk-supplied source records
//!
//! Records arrive in more than one shape: string-labeled maps from a JSON
//! deserializer, typed `(SourceField, value)` pairs from Rust callers, or
//! records that are already canonical. [`normalize`] folds all of them into a
//! [`Source`]. Keys are normalized, values are not: strings are copied
//! verbatim and no field is ever synthesized.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::json_kind;
use crate::{NormalizeConfig, Source, SourceError, SourceField, UnknownKeyPolicy};

/// A source record before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawSource {
    /// String-keyed mapping, e.g. `{"url": "http://x"}`
    Labeled(Map<String, Value>),
    /// Pairs keyed by the typed field vocabulary; the last duplicate wins
    Fielded(Vec<(SourceField, Option<String>)>),
    /// Already canonical
    Canonical(Source),
    /// Any other JSON value; only objects normalize successfully
    Json(Value),
}

impl From<Map<String, Value>> for RawSource {
    fn from(map: Map<String, Value>) -> Self {
        RawSource::Labeled(map)
    }
}

impl From<Vec<(SourceField, Option<String>)>> for RawSource {
    fn from(pairs: Vec<(SourceField, Option<String>)>) -> Self {
        RawSource::Fielded(pairs)
    }
}

impl From<Source> for RawSource {
    fn from(source: Source) -> Self {
        RawSource::Canonical(source)
    }
}

impl From<Value> for RawSource {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => RawSource::Labeled(map),
            other => RawSource::Json(other),
        }
    }
}

/// Normalize one raw record into its canonical form
///
/// # Errors
/// - [`SourceError::UnknownKey`] for an unrecognized label under
///   [`UnknownKeyPolicy::Reject`]
/// - [`SourceError::InvalidValue`] when a field holds neither a string nor `null`
/// - [`SourceError::NotAnObject`] when the record is not a mapping
pub fn normalize(raw: RawSource, config: &NormalizeConfig) -> Result<Source, SourceError> {
    match raw {
        RawSource::Canonical(source) => Ok(source),
        RawSource::Fielded(pairs) => {
            let mut source = Source::default();
            for (field, value) in pairs {
                source.set(field, value);
            }
            Ok(source)
        }
        RawSource::Labeled(map) => normalize_map(map, config),
        RawSource::Json(value) => Err(SourceError::NotAnObject(json_kind(&value).to_string())),
    }
}

fn normalize_map(map: Map<String, Value>, config: &NormalizeConfig) -> Result<Source, SourceError> {
    let mut source = Source::default();

    for (key, value) in map {
        let field = match key.parse::<SourceField>() {
            Ok(field) => field,
            Err(err) => match config.unknown_keys {
                UnknownKeyPolicy::Reject => return Err(err),
                UnknownKeyPolicy::Ignore => {
                    debug!(key = %key, "Ignoring unknown source key");
                    continue;
                }
            },
        };

        let value = match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => {
                return Err(SourceError::InvalidValue {
                    field: field.to_string(),
                    found: json_kind(&other).to_string(),
                })
            }
        };
        source.set(field, value);
    }

    Ok(source)
}
