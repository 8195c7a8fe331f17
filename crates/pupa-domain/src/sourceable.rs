//! The Sourceable capability
//!
//! Host entities embed a [`Sources`] field and implement [`Sourceable`] to
//! gain `add_source`, bulk replacement and a `sources` entry in their dump.
//!
//! # Construction order
//!
//! The embedding type initializes its `sources` field with [`Sources::new`]
//! before anything else in its constructor. A constructor-supplied payload
//! is applied afterwards through [`Sourceable::set_sources`], so the empty
//! default can never overwrite it.

use std::ops::Deref;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::source::is_blank;
use crate::{normalize, NormalizeConfig, RawSource, Source, SourceError};

/// Ordered list of sources attached to a host entity
///
/// Insertion order is kept. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sources(Vec<Source>);

impl Sources {
    /// Create an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a source citing `url`, with an optional note
    ///
    /// When `url` is absent, empty or whitespace only, nothing happens: no
    /// mutation, no error. Callers may pass optional scraped fields straight
    /// through. The note is only checked for presence, so `Some("")` is kept.
    pub fn add(&mut self, url: Option<&str>, note: Option<&str>) {
        let url = match url {
            Some(url) if !is_blank(Some(url)) => url,
            _ => return,
        };

        let mut source = Source::new(url);
        if let Some(note) = note {
            source = source.with_note(note);
        }
        trace!(url = %url, "Adding source");
        self.0.push(source);
    }

    /// Replace the whole list with canonical records
    pub fn replace<I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = Source>,
    {
        self.0 = sources.into_iter().collect();
        debug!(count = self.0.len(), "Replaced sources");
    }

    /// Normalize `records` and replace the whole list with the result
    ///
    /// Record count and order are preserved. If any record fails to
    /// normalize, the list is left untouched.
    pub fn replace_raw<I>(
        &mut self,
        records: I,
        config: &NormalizeConfig,
    ) -> Result<(), SourceError>
    where
        I: IntoIterator,
        I::Item: Into<RawSource>,
    {
        let normalized = records
            .into_iter()
            .map(|record| normalize(record.into(), config))
            .collect::<Result<Vec<_>, _>>()?;
        self.replace(normalized);
        Ok(())
    }

    /// Get the records as a slice
    pub fn as_slice(&self) -> &[Source] {
        &self.0
    }

    /// Build the dumped array of `{url, note}` objects
    pub fn to_value(&self) -> Value {
        Value::Array(self.0.iter().map(Source::to_value).collect())
    }
}

impl Deref for Sources {
    type Target = [Source];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Sources {
    type Item = &'a Source;
    type IntoIter = std::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Source>> for Sources {
    fn from(sources: Vec<Source>) -> Self {
        Self(sources)
    }
}

/// Capability trait for entities that record provenance
///
/// Implementors only provide access to their embedded [`Sources`].
pub trait Sourceable {
    /// Get the sources
    fn sources(&self) -> &Sources;

    /// Get the sources for mutation
    fn sources_mut(&mut self) -> &mut Sources;

    /// Append a source; blank or absent URLs are skipped silently
    fn add_source(&mut self, url: Option<&str>, note: Option<&str>) {
        self.sources_mut().add(url, note);
    }

    /// Replace the sources from raw records, with the default configuration
    fn set_sources<I>(&mut self, records: I) -> Result<(), SourceError>
    where
        I: IntoIterator,
        I::Item: Into<RawSource>,
        Self: Sized,
    {
        self.set_sources_with(records, &NormalizeConfig::default())
    }

    /// Replace the sources from raw records
    fn set_sources_with<I>(
        &mut self,
        records: I,
        config: &NormalizeConfig,
    ) -> Result<(), SourceError>
    where
        I: IntoIterator,
        I::Item: Into<RawSource>,
        Self: Sized,
    {
        self.sources_mut().replace_raw(records, config)
    }

    /// Replace the sources with canonical records
    fn replace_sources(&mut self, sources: Vec<Source>) {
        self.sources_mut().replace(sources);
    }

    /// Contribute the `sources` field to a dump
    fn dump_sources(&self, out: &mut Map<String, Value>) {
        out.insert("sources".to_string(), self.sources().to_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_is_empty() {
        assert!(Sources::new().is_empty());
        assert_eq!(Sources::default(), Sources::new());
    }

    #[test]
    fn test_add_preserves_order() {
        let mut sources = Sources::new();
        sources.add(Some("http://a"), None);
        sources.add(Some("http://b"), None);
        assert_eq!(
            sources.as_slice(),
            &[Source::new("http://a"), Source::new("http://b")]
        );
    }

    #[test]
    fn test_add_skips_blank() {
        let mut sources = Sources::new();
        sources.add(Some("http://a"), None);
        sources.add(None, Some("dangling note"));
        sources.add(Some(""), None);
        sources.add(Some(" \t "), Some("ignored"));
        assert_eq!(sources.as_slice(), &[Source::new("http://a")]);
    }

    #[test]
    fn test_add_keeps_empty_note() {
        let mut sources = Sources::new();
        sources.add(Some("http://a"), Some(""));
        assert_eq!(sources[0].note(), Some(""));
        assert_eq!(sources.to_value(), json!([{"url": "http://a", "note": ""}]));
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut sources = Sources::new();
        sources.add(Some("http://a"), None);
        sources.add(Some("http://a"), None);
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_replace_raw_is_atomic() {
        let mut sources = Sources::new();
        sources.add(Some("http://a"), None);

        let result = sources.replace_raw(
            vec![json!({"url": "http://x"}), json!({"url": 1})],
            &NormalizeConfig::default(),
        );
        assert!(result.is_err());
        assert_eq!(sources.as_slice(), &[Source::new("http://a")]);
    }

    #[test]
    fn test_serialize_transparent() {
        let mut sources = Sources::new();
        sources.add(Some("http://a"), Some("n"));
        assert_eq!(serde_json::to_value(&sources).unwrap(), sources.to_value());
    }
}
