//! Command implementations

mod import;
mod watch;

pub use import::run_import;
pub use watch::run_watch;
