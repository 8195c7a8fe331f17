//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use pupa_domain::{Dump, Entity, Sourceable, Sources};
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    pretty: bool,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, pretty: bool, color_enabled: bool) -> Self {
        Self {
            format,
            pretty,
            color_enabled,
        }
    }

    /// Format a normalized source list.
    pub fn format_sources(&self, sources: &Sources) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(&sources.to_value()),
            OutputFormat::Table => Ok(self.format_sources_table(sources)),
        }
    }

    /// Format an entity dump.
    pub fn format_entity(&self, entity: &Entity) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(&entity.to_dump()),
            OutputFormat::Table => {
                let dump = entity.to_dump();
                let name = dump["name"].as_str().unwrap_or_default();
                let id = dump["_id"].as_str().unwrap_or_default();
                let header = format!("{} {} ({})", entity.kind(), name, id);
                Ok(format!(
                    "{}\n{}",
                    self.colorize(&header, "cyan"),
                    self.format_sources_table(entity.sources())
                ))
            }
        }
    }

    fn format_json(&self, value: &Value) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }

    fn format_sources_table(&self, sources: &Sources) -> String {
        if sources.is_empty() {
            return self.colorize("No sources.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "URL", "Note"]);

        for (index, source) in sources.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                source.url().unwrap_or("-").to_string(),
                source.note().unwrap_or("").to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Colorize text if colors are enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
