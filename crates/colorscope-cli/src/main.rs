mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorscope", about = "Region color sampling and capture comparison")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image or raw frame metadata
    Info(commands::info::InfoArgs),
    /// Sample the color of one or more regions
    Sample(commands::sample::SampleArgs),
    /// Read the color of a single pixel
    Pixel(commands::pixel::PixelArgs),
    /// Compare two HLS sample files
    Drift(commands::drift::DriftArgs),
    /// Compare a capture against a reference with PSNR or SSIM
    Quality(commands::quality::QualityArgs),
    /// Print or save a default session config
    Config(commands::config::ConfigArgs),
    /// Run a sampling session from a TOML config
    Run(commands::run::RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Sample(args) => commands::sample::run(args),
        Commands::Pixel(args) => commands::pixel::run(args),
        Commands::Drift(args) => commands::drift::run(args),
        Commands::Quality(args) => commands::quality::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Run(args) => commands::run::run(args),
    }
}
