//! Manifest snapshots of the currently installed state

use anyhow::{anyhow, Context, Result};
use decree_core::config::ConfigFile;
use tracing::debug;

use crate::executor::{non_empty_lines, run_capture};

/// Render a manifest describing everything currently installed.
///
/// Each package line is annotated with its list's default source;
/// packages belonging to the config-wide default source need no
/// annotation and get none. Syncing against the result is a no-op.
pub async fn snapshot_manifest(config: &ConfigFile) -> Result<String> {
    let mut contents = String::new();
    for list in &config.lists {
        let source = config
            .source(&list.default_source)
            .ok_or_else(|| anyhow!("Source \"{}\" vanished from config", list.default_source))?;
        let prefix = if source.default {
            String::new()
        } else {
            format!("({}) ", source.name)
        };

        let listing = run_capture(&list.list_cmd, &[])
            .await
            .with_context(|| format!("Failed to query installed packages for \"{}\"", list.name))?;
        let packages = non_empty_lines(&listing);
        debug!(list = %list.name, count = packages.len(), "snapshotting list");
        for package in packages {
            contents.push_str(&prefix);
            contents.push_str(&package);
            contents.push('\n');
        }
    }
    Ok(contents)
}
