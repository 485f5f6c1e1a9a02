use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorscope_core::pipeline::config::SessionConfig;
use tracing::debug;

use super::ensure_exists;
use super::sample::run_with_progress;

#[derive(Args)]
pub struct RunArgs {
    /// Session config file (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: SessionConfig = toml::from_str(&contents).context("Invalid session config")?;
    debug!(
        config = %args.config.display(),
        regions = config.regions.len(),
        "Session config loaded"
    );
    ensure_exists(&config.input)?;

    run_with_progress(&config)?;
    Ok(())
}
