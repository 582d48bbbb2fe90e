//! Tabletop Catalog CLI
//!
//! Usage:
//!   tabletop-catalog [OPTIONS] [COMMAND]
//!
//! Commands:
//!   list [--toml]         Print every miniature in the catalog
//!   show <KEY> [--toml]   Print one miniature
//!   units                 Print the demo unit roster
//!
//! Without a command, prints the demo miniatures followed by the demo roster.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tabletop_catalog::{
    catalog_report, catalog_toml, demo_report, minis, roster_report, DisplayConfig,
};

#[derive(Parser)]
#[command(name = "tabletop-catalog")]
#[command(about = "Catalog of miniatures and AlphaStrike unit statistics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Display configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print every miniature in the catalog
    List {
        /// Print as TOML instead of the one-line format
        #[arg(long)]
        toml: bool,
    },
    /// Print the miniature with the given key
    Show {
        /// Catalog key, e.g. mad_cat_0
        key: String,

        /// Print as TOML instead of the one-line format
        #[arg(long)]
        toml: bool,
    },
    /// Print the demo templates and units
    Units,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => match DisplayConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DisplayConfig::default(),
    };

    let output = match cli.command {
        None => demo_report(&config),
        Some(Command::List { toml }) => {
            let keys: Vec<&str> = minis().iter().map(|e| e.key.as_str()).collect();
            if toml {
                catalog_toml(&keys)
            } else {
                catalog_report(&keys, &config)
            }
        }
        Some(Command::Show { key, toml: true }) => catalog_toml(&[key.as_str()]),
        Some(Command::Show { key, toml: false }) => catalog_report(&[key.as_str()], &config),
        Some(Command::Units) => roster_report(&config),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
