//! Decree CLI - declarative package state across imperative package managers
//!
//! This is the main entry point for the decree command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands, SyncArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    let config_dir = cli.config.as_deref();

    // Run command; bare `decree` behaves like `decree sync`
    match cli.command {
        None => commands::sync::run(SyncArgs::default(), config_dir).await,
        Some(Commands::Sync(args)) => commands::sync::run(args, config_dir).await,
        Some(Commands::Generate(args)) => commands::generate::run(args, config_dir).await,
        Some(Commands::Config(args)) => commands::config::run(args, config_dir),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
