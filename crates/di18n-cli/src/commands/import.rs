//! The import command: one-shot legacy conversion

use std::fs;
use std::path::Path;

use colored::Colorize;

use di18n_engine::import_legacy;
use di18n_template::to_canonical_string;

use crate::error::{CliError, Result};

/// Convert a flat single-language file into a new template file.
pub fn run_import(source: &Path, language: &str, output: &Path) -> Result<()> {
    let raw = fs::read_to_string(source)?;
    let flat: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| CliError::user(format!("Invalid JSON in {}: {e}", source.display())))?;

    let template = import_legacy(&flat, language)?;
    let canonical = to_canonical_string(&template)?;
    fs::write(output, canonical)?;

    println!(
        "{} wrote template {}",
        "di18n".green().bold(),
        output.display()
    );
    Ok(())
}
