//! armory CLI - cache-aware armory page scraping
//!
//! Thin driver over `armory-core`: parse arguments, build the client from
//! configuration, run one query, print JSON. All extraction logic lives in
//! the core crate.

use anyhow::Result;
use armory_core::{ArmoryClient, ArmoryConfig};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = load_config(&cli)?;
    let client = ArmoryClient::new(config)?;
    commands::execute(&client, cli.command).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ArmoryConfig> {
    let mut config = match &cli.config {
        Some(path) => ArmoryConfig::load_from(path)?,
        None => ArmoryConfig::load()?,
    };
    if let Some(dir) = &cli.cache_dir {
        config.cache_dir.clone_from(dir);
    }
    Ok(config)
}
