//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Decree - declarative package state across imperative package managers
#[derive(Parser, Debug)]
#[command(name = "decree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config directory (default: ~/.config/decree)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile installed packages with the declared manifests (default)
    Sync(SyncArgs),

    /// Snapshot currently installed packages into an initial manifest
    Generate(GenerateArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Print the commands that would run instead of executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Overwrite an existing generated manifest
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate the configuration
    Validate(ConfigValidateArgs),

    /// Show the parsed configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigValidateArgs {
    /// Validate a specific file instead of searching the config directory
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
