//! # decree-core
//!
//! Core library for the decree CLI:
//! - Typed configuration for sources and package lists, with validation
//! - Manifest parsing (tokens, comments, source annotations)
//! - Desired-state aggregation
//! - Pure reconciliation of desired state against installed state
//!
//! Everything here is synchronous and, apart from reading config and
//! manifest files, side-effect free. Running the resulting plan is
//! decree-exec's job.

pub mod config;
pub mod error;
pub mod manifest;
pub mod reconcile;
pub mod targets;

pub use config::{Config, ConfigFile, PackageList, Source};
pub use error::{Error, Result};
