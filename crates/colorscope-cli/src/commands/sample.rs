use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use colorscope_core::consts::DEFAULT_SAMPLE_FILE;
use colorscope_core::io::image_io::save_png;
use colorscope_core::io::raw::{FrameSize, FrameSource};
use colorscope_core::pipeline::config::{SamplingConfig, SessionConfig};
use colorscope_core::pipeline::{run_session_reported, SessionOutput};
use colorscope_core::preview::{draw_regions, SELECTION_COLOR};
use colorscope_core::region::Region;

use super::{ensure_exists, FilterArg, PixFmtArg, SpaceArg};
use crate::progress::BarReporter;
use crate::summary::{print_samples, print_session_summary};

#[derive(Args)]
pub struct SampleArgs {
    /// Input image or raw frame
    pub file: PathBuf,

    /// Region to sample as x1,y1,x2,y2 (repeatable)
    #[arg(long = "rect", required = true)]
    pub rects: Vec<Region>,

    /// Raw input pixel format
    #[arg(long = "pix-fmt", value_enum, default_value = "native")]
    pub pix_fmt: PixFmtArg,

    /// Frame size of a raw input, as WxH
    #[arg(short, long)]
    pub size: Option<FrameSize>,

    /// Color space of the sampled values
    #[arg(long = "out-fmt", value_enum, default_value = "rgb")]
    pub out_fmt: SpaceArg,

    /// Region statistic
    #[arg(long, value_enum, default_value = "avg")]
    pub filter: FilterArg,

    /// Sample file (JSON)
    #[arg(short, long, default_value = DEFAULT_SAMPLE_FILE)]
    pub output: PathBuf,

    /// Also save a PNG with the sampled regions outlined
    #[arg(long)]
    pub annotate: Option<PathBuf>,
}

pub fn run(args: &SampleArgs) -> Result<()> {
    ensure_exists(&args.file)?;
    let config = SessionConfig {
        input: args.file.clone(),
        pixel_format: args.pix_fmt.into(),
        size: args.size,
        output: args.output.clone(),
        regions: args.rects.clone(),
        sampling: SamplingConfig {
            color_space: args.out_fmt.into(),
            strategy: args.filter.into(),
        },
    };
    let output = run_with_progress(&config)?;

    if let Some(ref path) = args.annotate {
        annotate(&config, &output, path)?;
    }
    Ok(())
}

/// Summary, progress bar, sampled table. Shared with `run`.
pub fn run_with_progress(config: &SessionConfig) -> Result<SessionOutput> {
    print_session_summary(config);

    let reporter = Arc::new(BarReporter::new()?);
    let output = run_session_reported(config, reporter.clone()).context("Cannot read image")?;
    reporter.finish();

    println!();
    print_samples(&output);
    if output.samples.is_empty() {
        bail!("No region produced a sample");
    }
    println!("\nSamples saved to {}", config.output.display());
    Ok(output)
}

fn annotate(config: &SessionConfig, output: &SessionOutput, path: &Path) -> Result<()> {
    let source = FrameSource::open(&config.input, config.pixel_format, config.size)?;
    let regions: Vec<Region> = output.sampled.iter().map(|s| s.region).collect();
    let annotated = draw_regions(&source.rendered()?, &regions, SELECTION_COLOR)?;
    save_png(&annotated, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Annotated image saved to {}", path.display());
    Ok(())
}
