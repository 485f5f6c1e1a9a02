use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorscope_core::pipeline::config::SessionConfig;
use colorscope_core::region::Region;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default SessionConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let mut config = SessionConfig::new("input.png");
    config.regions.push(Region::from_coords(0, 0, 10, 10));
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
