//! Dealer i18n CLI
//!
//! Maintains a multi-language JSON template and projects it into one flat
//! JSON file per language, either continuously (`watch`) or by importing a
//! legacy single-language file (`import`).

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Watch {
            source,
            destination,
            language,
        } => commands::run_watch(&source, &destination, language.as_deref()),
        Commands::Import {
            source,
            language,
            output,
        } => commands::run_import(&source, &language, &output),
    }
}
