//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pupa CLI - Attach and normalize provenance for Popolo entities.
#[derive(Debug, Parser)]
#[command(name = "pupa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Emit compact JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PUPA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject unknown source keys instead of dropping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// JSON dump (default)
    Json,
    /// Table of sources
    Table,
}

/// Kind of entity to build.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// A person
    Person,
    /// An organization
    Organization,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a JSON array of source records
    Normalize(NormalizeArgs),

    /// Build an entity and cite sources for it
    Cite(CiteArgs),

    /// Rebuild an entity from its dump and dump it again
    Rehydrate(RehydrateArgs),
}

/// Arguments for the normalize command.
#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// JSON file to read (stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the cite command.
#[derive(Debug, Parser)]
pub struct CiteArgs {
    /// Entity name
    pub name: String,

    /// Entity kind
    #[arg(short, long, value_enum, default_value = "person")]
    pub kind: KindArg,

    /// Organization classification (ignored for people)
    #[arg(long)]
    pub classification: Option<String>,

    /// Source as "URL[::NOTE]"; blank URLs are skipped
    #[arg(short, long = "source")]
    pub sources: Vec<String>,
}

/// Arguments for the rehydrate command.
#[derive(Debug, Parser)]
pub struct RehydrateArgs {
    /// JSON file to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Entity kind
    #[arg(short, long, value_enum, default_value = "person")]
    pub kind: KindArg,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

impl From<KindArg> for pupa_domain::EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Person => pupa_domain::EntityKind::Person,
            KindArg::Organization => pupa_domain::EntityKind::Organization,
        }
    }
}
