//! Pupa CLI - Command-line interface for Popolo source provenance.

use clap::Parser;
use pupa_cli::commands::{self, read_input};
use pupa_cli::{Cli, Command, Config, Formatter};
use pupa_domain::UnknownKeyPolicy;

fn main() {
    let cli = Cli::parse();
    pupa_cli::init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> pupa_cli::Result<String> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.strict {
        config.normalize.unknown_keys = UnknownKeyPolicy::Reject;
    }

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let pretty = !cli.compact && config.settings.pretty;
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, pretty, color_enabled);

    match cli.command {
        Command::Normalize(args) => {
            let input = read_input(args.file.as_deref())?;
            commands::execute_normalize(&input, &config.normalize, &formatter)
        }
        Command::Cite(args) => commands::execute_cite(args, &formatter),
        Command::Rehydrate(args) => {
            let input = read_input(args.file.as_deref())?;
            commands::execute_rehydrate(&input, args.kind, &config.normalize, &formatter)
        }
    }
}
