//! The watch command: initial reconciliation pass plus the file-watch loop

use std::fs;
use std::path::Path;
use std::sync::mpsc;

use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use di18n_engine::{Action, OutputWriter, Publication, ReconcileLoop};

use crate::error::{CliError, Result};

/// Run the initial pass, then watch the source path until the process ends.
pub fn run_watch(source: &Path, destination: &Path, language: Option<&str>) -> Result<()> {
    let (mut engine, writer) = initial_pass(source, destination, language)?;
    println!(
        "{} watching {}",
        "di18n".green().bold(),
        source.display()
    );

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(source, RecursiveMode::NonRecursive)?;

    // Events are handled to completion one at a time, so reconciliation
    // passes never overlap.
    for res in rx {
        let event: Event = match res {
            Ok(event) => event,
            Err(e) => {
                warn!("watch error: {e}");
                continue;
            }
        };
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            continue;
        }

        // An unreadable source must still go through the state machine: if
        // this event is the echo of our own write, skipping it here would
        // leave suppression armed and swallow the next legitimate edit. An
        // empty payload clears a pending self-write and is otherwise
        // skipped as unparseable.
        let raw = fs::read_to_string(source).unwrap_or_else(|e| {
            debug!("source unreadable: {e}");
            String::new()
        });

        match engine.handle_change(&raw) {
            Action::Skip(reason) => debug!(?reason, "cycle skipped"),
            Action::Publish(publication) => {
                persist(source, &writer, &publication)?;
                info!(tags = ?publication.tags, "template reconciled");
            }
        }
    }
    Ok(())
}

/// Startup checks plus the first reconcile/persist/regenerate cycle.
fn initial_pass(
    source: &Path,
    destination: &Path,
    language: Option<&str>,
) -> Result<(ReconcileLoop, OutputWriter)> {
    if !source.is_file() {
        return Err(CliError::user(format!(
            "Source file not found: {}",
            source.display()
        )));
    }
    fs::create_dir_all(destination)?;

    let extra_tags: Vec<String> = language
        .map(|l| {
            l.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let raw = fs::read_to_string(source)?;
    let (engine, publication) = ReconcileLoop::bootstrap(&raw, &extra_tags)?;

    let writer = OutputWriter::new(destination);
    persist(source, &writer, &publication)?;
    info!(tags = ?publication.tags, "initial pass complete");

    Ok((engine, writer))
}

/// Write the canonical template back to the source path, then regenerate
/// the destination. The engine is already in its writing state, so the
/// notification this write produces is consumed as a self-write.
fn persist(source: &Path, writer: &OutputWriter, publication: &Publication) -> Result<()> {
    fs::write(source, &publication.canonical)?;
    writer.regenerate(&publication.template, &publication.tags)?;
    Ok(())
}
