//! Installed-state queries

use anyhow::{Context, Result};
use decree_core::config::ConfigFile;
use decree_core::reconcile::InstalledState;
use tracing::debug;

use crate::executor::{non_empty_lines, run_capture};

/// Run every package list's list command and collect the installed
/// package names, one set per list. Commands run sequentially, in
/// config declaration order.
pub async fn query_installed(config: &ConfigFile) -> Result<InstalledState> {
    let mut installed = InstalledState::new();
    for list in &config.lists {
        let output = run_capture(&list.list_cmd, &[])
            .await
            .with_context(|| format!("Failed to query installed packages for \"{}\"", list.name))?;
        let packages = non_empty_lines(&output);
        debug!(list = %list.name, count = packages.len(), "queried installed packages");
        installed.insert(list.name.clone(), packages.into_iter().collect());
    }
    Ok(installed)
}
