//! Reconciliation loop state machine
//!
//! The loop owns the last known-good template revision and decides, for
//! every file-change payload, whether it is the echo of our own write, a
//! language-set edit, a content edit, or nothing at all. It never touches
//! the filesystem itself: the caller reads the source file and performs the
//! writes a `Publish` action asks for.

use serde_json::Value;
use tracing::debug;

use di18n_template::{
    active_tags, declared_tags, discovered_tags, reconcile, strip_reserved, to_canonical_string,
};

use crate::error::Result;

/// Outcome of handling one change notification.
#[derive(Debug)]
pub enum Action {
    /// Nothing to do for this notification.
    Skip(SkipReason),
    /// A reconciled revision must be persisted and re-projected.
    Publish(Publication),
}

/// Why a notification produced no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Echo of this process's own write to the source path.
    SelfWrite,
    /// Payload is not valid JSON, not an object at the root, or nested past
    /// the supported depth. The prior revision stays authoritative.
    Unparseable,
    /// A declared-list edit that would empty the active set; treated as an
    /// accidental truncation.
    EmptyDeclaration,
    /// No material difference against the last known-good revision.
    NoChange,
}

/// A reconciled revision ready to be written out.
#[derive(Debug)]
pub struct Publication {
    /// Active language set the revision was reconciled against.
    pub tags: Vec<String>,
    /// Canonical serialized form for the source path.
    pub canonical: String,
    /// The reconciled template, for projection.
    pub template: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Writing,
}

/// State machine driving reconciliation across file-change events.
pub struct ReconcileLoop {
    last_good: Value,
    state: LoopState,
}

impl ReconcileLoop {
    /// Initial pass at process start.
    ///
    /// The source must parse here; only later change events may be invalid.
    /// `extra_tags` lets the CLI seed additional declared tags for the
    /// first reconciliation. The loop starts in the writing state, so the
    /// notification caused by persisting the returned publication is
    /// consumed as a self-write.
    pub fn bootstrap(raw: &str, extra_tags: &[String]) -> Result<(Self, Publication)> {
        let mut template: Value = serde_json::from_str(raw)?;

        let mut tags = active_tags(&template)?;
        for tag in extra_tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }

        reconcile(&mut template, &tags)?;
        let canonical = to_canonical_string(&template)?;

        let publication = Publication {
            tags,
            canonical,
            template: template.clone(),
        };
        let engine = Self {
            last_good: template,
            state: LoopState::Writing,
        };
        Ok((engine, publication))
    }

    /// Handle one change notification on the source path.
    pub fn handle_change(&mut self, raw: &str) -> Action {
        if self.state == LoopState::Writing {
            // The notification our own write generated; without this the
            // loop would re-trigger itself indefinitely.
            self.state = LoopState::Idle;
            debug!("consumed self-write notification");
            return Action::Skip(SkipReason::SelfWrite);
        }

        let Ok(candidate) = serde_json::from_str::<Value>(raw) else {
            debug!("change ignored: source no longer parses as JSON");
            return Action::Skip(SkipReason::Unparseable);
        };
        if !candidate.is_object() {
            return Action::Skip(SkipReason::Unparseable);
        }

        let old_stripped = strip_reserved(&self.last_good);
        let new_stripped = strip_reserved(&candidate);

        if new_stripped == old_stripped {
            let new_declared = declared_tags(&candidate);
            if new_declared == declared_tags(&self.last_good) {
                return Action::Skip(SkipReason::NoChange);
            }
            if new_declared.is_empty() {
                debug!("change ignored: declared list emptied");
                return Action::Skip(SkipReason::EmptyDeclaration);
            }
            debug!(tags = ?new_declared, "language-set edit");
            self.publish(candidate, new_declared)
        } else {
            // Content edits are authoritative for which languages exist;
            // a stale declared list is recomputed from scratch.
            let discovered = match discovered_tags(&candidate) {
                Ok(tags) => tags,
                Err(_) => return Action::Skip(SkipReason::Unparseable),
            };
            debug!(tags = ?discovered, "content edit");
            self.publish(candidate, discovered)
        }
    }

    fn publish(&mut self, mut candidate: Value, tags: Vec<String>) -> Action {
        if reconcile(&mut candidate, &tags).is_err() {
            return Action::Skip(SkipReason::Unparseable);
        }
        let canonical = match to_canonical_string(&candidate) {
            Ok(canonical) => canonical,
            Err(_) => return Action::Skip(SkipReason::Unparseable),
        };

        self.last_good = candidate.clone();
        // Must be set before the caller writes the source path, so the
        // resulting notification is consumed by the next handle_change.
        self.state = LoopState::Writing;

        Action::Publish(Publication {
            tags,
            canonical,
            template: candidate,
        })
    }

    /// The last revision accepted by the loop.
    pub fn last_revision(&self) -> &Value {
        &self.last_good
    }
}
