//! Sync command - reconcile installed packages with declared manifests

use anyhow::Result;
use camino::Utf8Path;
use decree_core::config::Config;
use decree_core::manifest::load_manifest_dir;
use decree_core::reconcile::{reconcile, Plan};
use decree_core::targets::{build_desired, collect_targets};
use dialoguer::Confirm;

use crate::cli::SyncArgs;
use crate::output;

pub async fn run(args: SyncArgs, config_dir: Option<&Utf8Path>) -> Result<()> {
    let config = Config::load(config_dir)?;

    let default_source = config.file().default_source().map(|s| s.name.clone());
    let entries = load_manifest_dir(&config.manifest_dir(), default_source.as_deref())?;
    tracing::debug!("Parsed {} manifest entries", entries.len());

    let targets = collect_targets(config.file(), &entries)?;
    let targets = decree_exec::expand_targets(config.file(), targets).await?;
    let desired = build_desired(config.file(), &targets)?;

    let spinner = output::spinner("Querying installed packages...");
    let installed = decree_exec::query_installed(config.file()).await;
    spinner.finish_and_clear();
    let installed = installed?;

    let plan = reconcile(&desired, &installed);
    if plan.is_empty() {
        output::info("Nothing to do.");
        return Ok(());
    }

    print_plan(&plan);

    if args.dry_run {
        output::header("Commands that would run");
        decree_exec::apply(config.file(), &plan, true).await?;
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Proceed?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Sync cancelled");
            return Ok(());
        }
    }

    decree_exec::apply(config.file(), &plan, false).await?;
    output::success("Sync complete");
    Ok(())
}

/// Print the plan, one section per package list
fn print_plan(plan: &Plan) {
    for (name, list) in &plan.lists {
        output::header(name);
        if !list.remove.is_empty() {
            output::kv("remove", &list.remove.join(" "));
        }
        for (source, packages) in &list.install {
            output::kv("install", &format!("({source}) {}", packages.join(" ")));
        }
    }
    println!();
}
