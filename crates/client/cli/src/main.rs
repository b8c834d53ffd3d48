//! Command-line front-end for tabletop grid coordinates.
//!
//! Run with: `tabletop distance "(0, 0)" 4 2`
mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use commands::Command;
use config::CliConfig;

/// Grid coordinate calculator for tabletop battle maps
#[derive(Parser)]
#[command(name = "tabletop")]
#[command(about = "Grid coordinate calculator for tabletop battle maps", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Length of one grid square in feet
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    feet_per_square: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

/// Log filter from `RUST_LOG`, falling back to `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TABLETOP_* variables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.json, cli.feet_per_square);
    tracing::debug!(?config, "loaded configuration");

    let outcome = cli.command.execute(&config.grid)?;
    println!("{}", outcome.render(config.output)?);

    Ok(())
}
