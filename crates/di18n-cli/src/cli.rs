//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dealer i18n - project a multi-language template into per-language files
#[derive(Parser, Debug)]
#[command(name = "di18n")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Watch a template file and regenerate per-language files on change
    ///
    /// Runs one reconciliation pass at startup, then keeps watching the
    /// template. The destination directory is fully owned by the process
    /// and regenerated on every cycle.
    ///
    /// Examples:
    ///   di18n watch -s i18n.json -d public/locales
    ///   di18n watch -s i18n.json -d public/locales -l en,fr
    Watch {
        /// Path to the template file
        #[arg(short, long)]
        source: PathBuf,

        /// Destination directory for the generated files
        #[arg(short, long)]
        destination: PathBuf,

        /// Extra language tags for the initial pass (comma-separated)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Convert a flat single-language JSON file into a template
    Import {
        /// Path to the flat JSON file
        #[arg(short, long)]
        source: PathBuf,

        /// Language tag the flat file is written in
        #[arg(short, long)]
        language: String,

        /// Path for the new template file
        #[arg(short, long)]
        output: PathBuf,
    },
}
