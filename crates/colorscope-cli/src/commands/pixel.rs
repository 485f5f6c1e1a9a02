use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colorscope_core::color::aggregate::AggregateStrategy;
use colorscope_core::consts::DEFAULT_SAMPLE_FILE;
use colorscope_core::io::raw::{FrameSize, FrameSource};
use colorscope_core::pipeline::ColorReader;

use super::{ensure_exists, PixFmtArg, SpaceArg};

#[derive(Args)]
pub struct PixelArgs {
    /// Input image or raw frame
    pub file: PathBuf,

    /// Pixel position as x,y
    #[arg(long)]
    pub at: String,

    /// Raw input pixel format
    #[arg(long = "pix-fmt", value_enum, default_value = "native")]
    pub pix_fmt: PixFmtArg,

    /// Frame size of a raw input, as WxH
    #[arg(short, long)]
    pub size: Option<FrameSize>,

    /// Color space of the printed value
    #[arg(long = "out-fmt", value_enum, default_value = "rgb")]
    pub out_fmt: SpaceArg,
}

pub fn run(args: &PixelArgs) -> Result<()> {
    ensure_exists(&args.file)?;
    let (x, y) = parse_position(&args.at)?;
    let source = FrameSource::open(&args.file, args.pix_fmt.into(), args.size)?;
    let space = args.out_fmt.into();
    // Nothing is sampled into the store, so the output file is never written.
    let reader = ColorReader::new(
        source.rendered()?,
        space,
        AggregateStrategy::Average,
        DEFAULT_SAMPLE_FILE,
    );
    let image = reader.image();
    let color = reader.read_pixel(x, y).with_context(|| {
        format!(
            "Pixel ({x}, {y}) is outside the {}x{} image",
            image.width(),
            image.height()
        )
    })?;

    println!("{}", space.channel_names().join("\t"));
    println!("{}\t{}\t{}", color[0], color[1], color[2]);
    Ok(())
}

fn parse_position(s: &str) -> Result<(i32, i32)> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("Invalid position '{s}' (expected x,y)");
    };
    let x = x.trim().parse().with_context(|| format!("Invalid x in '{s}'"))?;
    let y = y.trim().parse().with_context(|| format!("Invalid y in '{s}'"))?;
    Ok((x, y))
}
