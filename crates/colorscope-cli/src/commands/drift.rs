use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorscope_core::drift::drift;
use colorscope_core::io::samples;

use super::ensure_exists;

#[derive(Args)]
pub struct DriftArgs {
    /// Reference HLS sample file
    pub reference: PathBuf,

    /// Capture HLS sample file
    pub capture: PathBuf,
}

pub fn run(args: &DriftArgs) -> Result<()> {
    ensure_exists(&args.reference)?;
    ensure_exists(&args.capture)?;
    let reference = samples::load(&args.reference)
        .with_context(|| format!("Cannot load {}", args.reference.display()))?;
    let capture = samples::load(&args.capture)
        .with_context(|| format!("Cannot load {}", args.capture.display()))?;

    let result = drift(&reference, &capture).context("Cannot compute drift")?;
    for (name, value) in ["H", "L", "S"].iter().zip(result.as_array()) {
        println!("\u{0394}{name} [average] : {value:.2}%");
    }
    Ok(())
}
