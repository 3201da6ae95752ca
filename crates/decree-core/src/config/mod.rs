//! Configuration loading, schema types, and validation

mod loader;
mod types;
mod validate;

pub use loader::Config;
pub use types::{ConfigFile, PackageList, Source};
pub use validate::validate;
