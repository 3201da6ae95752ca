//! Config command - validate and show the configuration

use anyhow::Result;
use camino::Utf8Path;
use decree_core::config::Config;

use crate::cli::{ConfigCommands, ConfigShowArgs, ConfigValidateArgs};
use crate::output;

pub fn run(cmd: ConfigCommands, config_dir: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Validate(args) => validate(args, config_dir),
        ConfigCommands::Show(args) => show(args, config_dir),
    }
}

fn validate(args: ConfigValidateArgs, config_dir: Option<&Utf8Path>) -> Result<()> {
    let config = match &args.file {
        Some(path) => Config::load_file(path)?,
        None => Config::load(config_dir)?,
    };

    output::success(&format!("Configuration is valid: {}", config.path()));
    output::kv("Sources", &config.file().sources.len().to_string());
    output::kv("Package lists", &config.file().lists.len().to_string());
    Ok(())
}

fn show(args: ConfigShowArgs, config_dir: Option<&Utf8Path>) -> Result<()> {
    let config = Config::load(config_dir)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(config.file())?);
    } else {
        print!("{}", serde_yaml_ng::to_string(config.file())?);
    }
    Ok(())
}
