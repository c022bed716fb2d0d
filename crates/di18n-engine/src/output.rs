//! Destination directory regeneration
//!
//! The destination is fully owned by this process: every cycle deletes the
//! files that are there and writes one `<tag>.json` projection per active
//! language. Failures are propagated, never swallowed; a partial,
//! inconsistent output tree is worse than stopping.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use di18n_template::project;

use crate::error::{Error, Result};

/// Writes per-language projections into a destination directory.
pub struct OutputWriter {
    destination: PathBuf,
}

impl OutputWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Clear the destination and write one projection file per tag.
    pub fn regenerate(&self, template: &Value, tags: &[String]) -> Result<()> {
        // Tags become filenames; validate them all before clearing anything.
        for tag in tags {
            if tag.contains(['/', '\\']) || tag == ".." || tag == "." {
                return Err(Error::InvalidTag { tag: tag.clone() });
            }
        }

        fs::create_dir_all(&self.destination).map_err(|e| Error::io(&self.destination, e))?;
        self.clear()?;

        for tag in tags {
            let projected = project(template, tag)?;
            let content = serde_json::to_string_pretty(&projected)?;
            let path = self.destination.join(format!("{tag}.json"));
            fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
            debug!(tag, path = %path.display(), "wrote projection");
        }
        Ok(())
    }

    /// Delete every file directly inside the destination (flat, non-recursive).
    fn clear(&self) -> Result<()> {
        let entries =
            fs::read_dir(&self.destination).map_err(|e| Error::io(&self.destination, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.destination, e))?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            }
        }
        Ok(())
    }
}
