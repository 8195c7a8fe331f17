//! Cite command implementation.

use crate::cli::CiteArgs;
use crate::error::Result;
use crate::output::Formatter;
use pupa_domain::{Entity, Sourceable};

/// Execute the cite command.
///
/// Each `--source` value is split at its first `::` into URL and note.
/// Blank URLs are handed to `add_source` as-is and skipped there.
pub fn execute_cite(args: CiteArgs, formatter: &Formatter) -> Result<String> {
    let mut entity = Entity::new(args.kind.into(), args.name);
    if let (Some(classification), Entity::Organization(org)) = (args.classification, &mut entity) {
        org.classification = Some(classification);
    }

    for raw in &args.sources {
        let (url, note) = split_source_arg(raw);
        entity.add_source(Some(url), note);
    }

    formatter.format_entity(&entity)
}

/// Split "URL[::NOTE]" into its URL and optional note.
///
/// Surrounding whitespace is trimmed from both parts. An empty note after
/// `::` counts as no note.
fn split_source_arg(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once("::") {
        Some((url, note)) => {
            let note = note.trim();
            (url.trim(), (!note.is_empty()).then_some(note))
        }
        None => (raw.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;
    use crate::config::OutputFormat;
    use serde_json::{json, Value};

    fn cite(kind: KindArg, sources: &[&str]) -> Value {
        let args = CiteArgs {
            name: "Jane Doe".to_string(),
            kind,
            classification: Some("party".to_string()),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        };
        let formatter = Formatter::new(OutputFormat::Json, false, false);
        serde_json::from_str(&execute_cite(args, &formatter).unwrap()).unwrap()
    }

    #[test]
    fn test_split_source_arg() {
        assert_eq!(split_source_arg("http://a"), ("http://a", None));
        assert_eq!(split_source_arg("http://a::bio"), ("http://a", Some("bio")));
        assert_eq!(split_source_arg("http://a::"), ("http://a", None));
        assert_eq!(split_source_arg("::orphan note"), ("", Some("orphan note")));
        assert_eq!(split_source_arg(""), ("", None));
    }

    #[test]
    fn test_split_source_arg_note_with_spaces() {
        assert_eq!(
            split_source_arg("http://a::press release"),
            ("http://a", Some("press release"))
        );
        assert_eq!(
            split_source_arg("http://example.org/bio :: official bio page "),
            ("http://example.org/bio", Some("official bio page"))
        );
    }

    #[test]
    fn test_cite_scenario() {
        let dump = cite(
            KindArg::Person,
            &[
                "http://example.org/bio::official bio",
                "::note without url",
                "http://example.org/press",
            ],
        );
        assert_eq!(
            dump["sources"],
            json!([
                {"url": "http://example.org/bio", "note": "official bio"},
                {"url": "http://example.org/press"}
            ])
        );
        assert!(dump.get("classification").is_none());
    }

    #[test]
    fn test_cite_organization_classification() {
        let dump = cite(KindArg::Organization, &[]);
        assert_eq!(dump["classification"], "party");
        assert_eq!(dump["sources"], json!([]));
    }
}
