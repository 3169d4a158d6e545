//! Kinship CLI - Command-line interface for the relationship resolution engine.

use anyhow::Context;
use clap::Parser;
use kinship_cli::commands;
use kinship_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config; an explicit path must exist
    let config = match &cli.config {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => Config::load().context("Failed to load config")?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, config.settings.pretty);

    match cli.command {
        Command::Resolve(args) => {
            commands::execute_resolve(args, &config.resolver, &formatter)?;
        }
        Command::Inspect(args) => {
            commands::execute_inspect(args, &config.resolver, &formatter)?;
        }
        Command::Catalog => {
            commands::execute_catalog(&formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays a clean JSON document
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
