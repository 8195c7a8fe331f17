//! Source field vocabulary

use std::fmt;
use std::str::FromStr;

use crate::SourceError;

/// The two keys a canonical source record may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceField {
    /// Locator of the supporting document
    Url,
    /// Human-readable annotation
    Note,
}

impl SourceField {
    /// All fields, `Url` first; dumped objects order keys alphabetically
    pub const ALL: [SourceField; 2] = [SourceField::Url, SourceField::Note];

    /// Get the string label of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceField::Url => "url",
            SourceField::Note => "note",
        }
    }
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceField {
    type Err = SourceError;

    /// Labels are matched exactly; `"URL"` is an unknown key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(SourceField::Url),
            "note" => Ok(SourceField::Note),
            other => Err(SourceError::UnknownKey(other.to_string())),
        }
    }
}
