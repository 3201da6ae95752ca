//! Generate command - snapshot installed packages into a manifest

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use decree_core::config::Config;
use decree_exec::snapshot_manifest;

use crate::cli::GenerateArgs;
use crate::output;

/// Name of the manifest file written by `decree generate`
const GENERATED_FILE: &str = "generated";

pub async fn run(args: GenerateArgs, config_dir: Option<&Utf8Path>) -> Result<()> {
    let config = Config::load(config_dir)?;

    let dir = config.manifest_dir();
    let path = dir.join(GENERATED_FILE);
    if path.exists() && !args.force {
        return Err(anyhow!("{path} already exists. Pass --force to overwrite"));
    }

    let spinner = output::spinner("Listing installed packages...");
    let contents = snapshot_manifest(config.file()).await;
    spinner.finish_and_clear();
    let contents = contents?;

    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {dir}"))?;
    std::fs::write(&path, &contents).with_context(|| format!("Failed to write {path}"))?;

    output::success(&format!("Wrote {path}"));
    Ok(())
}
