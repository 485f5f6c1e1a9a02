use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colorscope_core::io::raw::{FrameSize, FrameSource};

use super::{ensure_exists, PixFmtArg};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image or raw frame
    pub file: PathBuf,

    /// Raw input pixel format
    #[arg(long = "pix-fmt", value_enum, default_value = "native")]
    pub pix_fmt: PixFmtArg,

    /// Frame size of a raw input, as WxH
    #[arg(short, long)]
    pub size: Option<FrameSize>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    ensure_exists(&args.file)?;
    let source = FrameSource::open(&args.file, args.pix_fmt.into(), args.size)?;
    let image = source.rendered()?;
    let file_bytes = std::fs::metadata(&args.file)?.len();

    println!("File:        {}", source.path().display());
    println!("Format:      {}", source.format());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    if let Some(size) = source.size() {
        println!("Frame size:  {} bytes", size.raw_frame_len());
    }
    println!("File size:   {:.1} KB", file_bytes as f64 / 1024.0);

    Ok(())
}
