//! # decree-exec
//!
//! Shell execution for decree: queries installed state via list
//! commands, expands raw targets via expand commands, and applies
//! reconciliation plans via remove and install commands.
//!
//! Commands run through `bash -c`, one at a time. Install and remove
//! commands inherit the terminal so package managers can prompt;
//! list and expand commands have their stdout captured.

mod apply;
mod executor;
mod expand;
mod query;
mod snapshot;

pub use apply::apply;
pub use executor::{run_capture, run_interactive, PKGS_VAR, TARGETS_VAR};
pub use expand::expand_targets;
pub use query::query_installed;
pub use snapshot::snapshot_manifest;
