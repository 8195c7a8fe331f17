//! Normalize command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use pupa_domain::{NormalizeConfig, Sources};
use serde_json::Value;

/// Execute the normalize command on JSON input text.
///
/// The input must be a JSON array of source records. Returns the formatted
/// canonical list.
pub fn execute_normalize(
    input: &str,
    config: &NormalizeConfig,
    formatter: &Formatter,
) -> Result<String> {
    let records = match serde_json::from_str::<Value>(input)? {
        Value::Array(records) => records,
        _ => {
            return Err(CliError::InvalidInput(
                "Expected a JSON array of source records".to_string(),
            ))
        }
    };

    let mut sources = Sources::new();
    sources.replace_raw(records, config)?;
    tracing::debug!(count = sources.len(), "Normalized source records");

    formatter.format_sources(&sources)
}
