//! Shell command execution
//!
//! Every configured command is a shell template run through `bash -c`.
//! Package names and raw targets are handed over in environment
//! variables rather than interpolated into the command line.

use anyhow::{anyhow, Context, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Environment variable carrying space-joined package names for
/// install and remove commands
pub const PKGS_VAR: &str = "PKGS";

/// Environment variable carrying space-joined raw targets for expand
/// commands
pub const TARGETS_VAR: &str = "TARGETS";

/// Run a command template, capturing stdout.
///
/// Stdin is closed so list and expand commands cannot silently block on
/// input. A non-zero exit is an error carrying the template and stderr.
pub async fn run_capture(template: &str, env: &[(&str, String)]) -> Result<String> {
    debug!(command = template, "running (capture)");
    let mut cmd = Command::new("bash");
    cmd.arg("-c").arg(template);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());

    let output = cmd
        .output()
        .await
        .with_context(|| format!("Failed to launch `{template}`"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "`{template}` failed ({}): {}",
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a command template with inherited stdio, so package managers can
/// prompt, show progress, and ask for sudo credentials.
///
/// With `dry_run` the command is printed instead of executed, prefixed
/// by its environment so the line can be replayed in a shell.
pub async fn run_interactive(template: &str, env: &[(&str, String)], dry_run: bool) -> Result<()> {
    if dry_run {
        let prefix: String = env
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\" "))
            .collect();
        println!("{prefix}{template}");
        return Ok(());
    }

    debug!(command = template, "running (interactive)");
    let mut cmd = Command::new("bash");
    cmd.arg("-c").arg(template);
    for (key, value) in env {
        cmd.env(key, value);
    }

    let status = cmd
        .status()
        .await
        .with_context(|| format!("Failed to launch `{template}`"))?;

    if !status.success() {
        return Err(anyhow!("`{template}` failed ({status})"));
    }

    Ok(())
}

/// Split captured command output into lines, dropping empty ones.
pub(crate) fn non_empty_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
