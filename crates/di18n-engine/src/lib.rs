//! Reconciliation engine for Dealer i18n
//!
//! Sits between the pure tree operations in `di18n-template` and the CLI:
//!
//! - **ReconcileLoop**: the two-state machine that turns raw file-change
//!   payloads into publish/skip decisions without touching the filesystem
//! - **OutputWriter**: clears and repopulates the destination directory
//!   with one `<tag>.json` projection per active language
//! - **Legacy importer**: one-shot conversion of a flat single-language
//!   document into a template skeleton

pub mod error;
pub mod import;
pub mod output;
pub mod watch;

pub use error::{Error, Result};
pub use import::import_legacy;
pub use output::OutputWriter;
pub use watch::{Action, Publication, ReconcileLoop, SkipReason};
