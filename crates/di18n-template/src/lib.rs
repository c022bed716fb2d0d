//! Template tree model for Dealer i18n
//!
//! A template is an ordered JSON object whose mappings may, at any depth,
//! be "language nodes": objects keyed by `lang:<tag>` entries holding the
//! per-language value for that slot. This crate provides:
//!
//! - **Node classification**: the `lang:` prefix predicate and the reserved
//!   declared-language key
//! - **Language set resolution**: tag discovery and the declared-list read
//! - **Reconciliation**: keeping every language node in sync with an active
//!   tag set
//! - **Projection**: deriving the single-language tree for one tag
//! - **Canonical serialization**: sorted-key pretty JSON with the reserved
//!   key pinned first
//!
//! Everything here is pure: no filesystem, no watching. The engine crate
//! layers the reconciliation loop and output writing on top.

pub mod canonical;
pub mod error;
pub mod node;
pub mod project;
pub mod reconcile;
pub mod resolver;

pub use canonical::{canonicalize, to_canonical_string};
pub use error::{Error, Result};
pub use node::{LANG_PREFIX, MAX_DEPTH, RESERVED_KEY, is_language_node, lang_key, tag_of};
pub use project::project;
pub use reconcile::{reconcile, strip_reserved};
pub use resolver::{active_tags, declared_tags, discovered_tags};
