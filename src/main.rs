use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use web_image_producer::config::{DEFAULT_QUALITY, RunConfig};

/// Produce responsive JPEG derivatives for srcset delivery:
/// - one JPEG per common device width, scaled to the image's share of the viewport
/// - one small blurred placeholder for lazy loading
#[derive(Parser, Debug)]
#[command(name = "webimg")]
#[command(about = "Resize images into responsive JPEG sets with a blurred placeholder")]
#[command(long_about = "Resize an image, or every image in a directory, to the device widths
1440, 1242, 1125, 1080, 828, 750, 720 and 640 scaled by the viewport percentage.
Writes {name}-{width}.jpg for each width plus {name}-placeholder.jpg.")]
struct Args {
    /// Image file, or directory of images (not recursive)
    #[arg(help = "File path to the full image, or folder of full images")]
    input: PathBuf,

    /// Output directory (must exist)
    #[arg(help = "Folder to write the new images to")]
    destination: PathBuf,

    /// Share of the viewport width the image takes
    #[arg(help = "Percentage of the viewport width the image will take, e.g. 50")]
    percent_viewport: u32,

    /// JPEG quality
    #[arg(short, long, default_value_t = DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(0..=100),
          help = "JPEG quality of the output images, 0-100")]
    quality: u8,

    /// Log verbosity
    #[arg(short, long, action = clap::ArgAction::Count,
          help = "More output: -v for per-file details, -vv for everything")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RunConfig::new(
        args.input,
        args.destination,
        args.percent_viewport,
        args.quality,
    );

    config.validate().map_err(anyhow::Error::msg)?;
    let reports = web_image_producer::run(&config)
        .with_context(|| format!("Failed to produce images from {}", config.input.display()))?;

    let files: usize = reports.iter().map(|r| r.written.len()).sum();
    log::info!("Done: {} source(s), {} file(s) written", reports.len(), files);
    Ok(())
}

/// Default to `info` (`debug`/`trace` with -v/-vv); RUST_LOG still wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
