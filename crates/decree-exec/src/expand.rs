//! Target expansion
//!
//! Some sources take raw targets that are not literal package names
//! (meta-packages, package groups, project URLs). Sources with an
//! expand command get their targets piped through it before
//! reconciliation, so desired state is always in the same namespace as
//! the list command's output.

use anyhow::{anyhow, Context, Result};
use decree_core::config::ConfigFile;
use decree_core::targets::TargetSet;
use tracing::debug;

use crate::executor::{non_empty_lines, run_capture, TARGETS_VAR};

/// Replace each source's raw targets with the output of its expand
/// command. Sources without one keep their targets as-is.
pub async fn expand_targets(config: &ConfigFile, mut targets: TargetSet) -> Result<TargetSet> {
    for (name, raw) in targets.iter_mut() {
        let source = config
            .source(name)
            .ok_or_else(|| anyhow!("Source \"{name}\" vanished from config"))?;
        let Some(expand_cmd) = &source.expand_cmd else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }

        let env = [(TARGETS_VAR, raw.join(" "))];
        let output = run_capture(expand_cmd, &env)
            .await
            .with_context(|| format!("Failed to expand targets for source \"{name}\""))?;
        let expanded = non_empty_lines(&output);
        debug!(source = %name, from = raw.len(), to = expanded.len(), "expanded targets");
        *raw = expanded;
    }
    Ok(targets)
}
