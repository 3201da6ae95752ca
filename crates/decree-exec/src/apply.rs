//! Plan execution
//!
//! Removals run first so a package changing owners within a list is
//! gone before its new source installs it. Nothing here is
//! transactional: a failing command aborts the remaining batches and
//! already-finished commands stay applied.

use anyhow::{anyhow, Context, Result};
use decree_core::config::ConfigFile;
use decree_core::reconcile::Plan;
use tracing::info;

use crate::executor::{run_interactive, PKGS_VAR};

/// Execute a reconciliation plan: one remove command per list with
/// removals, then one install command per source with installs.
pub async fn apply(config: &ConfigFile, plan: &Plan, dry_run: bool) -> Result<()> {
    for (list_name, packages) in plan.removals_by_list() {
        let list = config
            .list(list_name)
            .ok_or_else(|| anyhow!("Package list \"{list_name}\" vanished from config"))?;
        info!(list = list_name, count = packages.len(), "removing packages");

        let env = [(PKGS_VAR, packages.join(" "))];
        run_interactive(&list.remove_cmd, &env, dry_run)
            .await
            .with_context(|| format!("Failed to remove packages from \"{list_name}\""))?;
    }

    for (source_name, packages) in plan.installs_by_source() {
        let source = config
            .source(source_name)
            .ok_or_else(|| anyhow!("Source \"{source_name}\" vanished from config"))?;
        info!(source = source_name, count = packages.len(), "installing packages");

        let env = [(PKGS_VAR, packages.join(" "))];
        run_interactive(&source.install_cmd, &env, dry_run)
            .await
            .with_context(|| format!("Failed to install packages via \"{source_name}\""))?;
    }

    Ok(())
}
