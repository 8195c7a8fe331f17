//! Configuration for source normalization

use serde::{Deserialize, Serialize};

/// What to do with keys outside the `{url, note}` vocabulary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Drop the key and keep the record
    #[default]
    Ignore,
    /// Fail the whole bulk replacement
    Reject,
}

/// Configuration for turning raw records into canonical sources
///
/// Deserializable so that embedding applications can load it as one table of
/// their own configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Policy for unrecognized keys
    #[serde(default)]
    pub unknown_keys: UnknownKeyPolicy,
}

impl NormalizeConfig {
    /// Lenient preset: unknown keys are dropped
    pub fn lenient() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Ignore,
        }
    }

    /// Strict preset: unknown keys are an error
    pub fn strict() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Reject,
        }
    }
}
