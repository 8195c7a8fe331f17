//! Rehydrate command implementation.

use crate::cli::KindArg;
use crate::error::Result;
use crate::output::Formatter;
use pupa_domain::{Entity, NormalizeConfig, Sourceable};
use serde_json::Value;

/// Execute the rehydrate command on a dumped entity.
pub fn execute_rehydrate(
    input: &str,
    kind: KindArg,
    config: &NormalizeConfig,
    formatter: &Formatter,
) -> Result<String> {
    let dump: Value = serde_json::from_str(input)?;
    let entity = Entity::from_dump(kind.into(), &dump, config)?;
    tracing::debug!(
        kind = %entity.kind(),
        sources = entity.sources().len(),
        "Rehydrated entity"
    );

    formatter.format_entity(&entity)
}
