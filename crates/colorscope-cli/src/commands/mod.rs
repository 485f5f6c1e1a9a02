pub mod config;
pub mod drift;
pub mod info;
pub mod pixel;
pub mod quality;
pub mod run;
pub mod sample;

use std::path::Path;

use anyhow::{bail, Result};
use clap::ValueEnum;
use colorscope_core::color::aggregate::AggregateStrategy;
use colorscope_core::color::space::ColorSpace;
use colorscope_core::io::raw::PixelFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SpaceArg {
    Rgb,
    Yuv,
    Hsv,
    Hls,
}

impl From<SpaceArg> for ColorSpace {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Rgb => ColorSpace::Rgb,
            SpaceArg::Yuv => ColorSpace::Yuv,
            SpaceArg::Hsv => ColorSpace::Hsv,
            SpaceArg::Hls => ColorSpace::Hls,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FilterArg {
    #[value(alias = "average")]
    Avg,
    #[value(alias = "median")]
    Med,
}

impl From<FilterArg> for AggregateStrategy {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Avg => AggregateStrategy::Average,
            FilterArg::Med => AggregateStrategy::Median,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PixFmtArg {
    Native,
    Nv21,
    Nv12,
    I420,
}

impl From<PixFmtArg> for PixelFormat {
    fn from(arg: PixFmtArg) -> Self {
        match arg {
            PixFmtArg::Native => PixelFormat::Native,
            PixFmtArg::Nv21 => PixelFormat::Nv21,
            PixFmtArg::Nv12 => PixelFormat::Nv12,
            PixFmtArg::I420 => PixelFormat::I420,
        }
    }
}

/// Fail early with a readable message before the core sees the path.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    Ok(())
}
