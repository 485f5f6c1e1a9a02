use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colorscope_core::io::raw::{FrameSize, FrameSource};
use colorscope_core::quality::{QualityMeasurement, QualityMethod, QualityMetric};

use super::{ensure_exists, PixFmtArg};

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Ssim,
    Psnr,
}

impl From<MetricArg> for QualityMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Ssim => QualityMetric::Ssim,
            MetricArg::Psnr => QualityMetric::Psnr,
        }
    }
}

#[derive(Args)]
pub struct QualityArgs {
    /// Reference image or raw frame
    #[arg(long = "ref")]
    pub reference: PathBuf,

    /// Captured image or raw frame
    #[arg(long = "cap")]
    pub capture: PathBuf,

    /// Similarity metric
    #[arg(long, value_enum, default_value = "ssim")]
    pub metric: MetricArg,

    /// Compare a single channel instead of the whole image
    #[arg(long)]
    pub channel: Option<usize>,

    /// Pixel format of the reference
    #[arg(long = "ref-pix-fmt", value_enum, default_value = "native")]
    pub ref_pix_fmt: PixFmtArg,

    /// Frame size of a raw reference, as WxH
    #[arg(long = "ref-size")]
    pub ref_size: Option<FrameSize>,

    /// Pixel format of the capture
    #[arg(long = "cap-pix-fmt", value_enum, default_value = "native")]
    pub cap_pix_fmt: PixFmtArg,

    /// Frame size of a raw capture, as WxH
    #[arg(long = "cap-size")]
    pub cap_size: Option<FrameSize>,
}

pub fn run(args: &QualityArgs) -> Result<()> {
    ensure_exists(&args.reference)?;
    ensure_exists(&args.capture)?;
    let reference = FrameSource::open(&args.reference, args.ref_pix_fmt.into(), args.ref_size)?;
    let capture = FrameSource::open(&args.capture, args.cap_pix_fmt.into(), args.cap_size)?;

    let method = QualityMethod::for_metric(args.metric.into(), args.channel);
    let measurement = QualityMeasurement::create(&reference, &capture, method)
        .context("Cannot load images")?;
    let score = measurement.process(args.channel)?;

    println!("{score}");
    Ok(())
}
