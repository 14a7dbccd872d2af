//! # Web Image Producer
//!
//! Generates responsive JPEG derivatives for `srcset` delivery: one file per common device
//! width scaled by the share of the viewport the image occupies, plus a small blurred
//! placeholder for lazy loading.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `config`: Run parameters and validation
//! - `inputs`: Resolving a file or directory argument into the files to process
//! - `processing`: Decode, resize, blur, encode and write for one source image
//! - `error`: The error type shared by every step
//!
//! Width tables, scale plans, Lanczos resizing and the box blur live in the
//! `webimg-scale` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use web_image_producer::{config::RunConfig, run};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RunConfig::new("photos/".into(), "public/img".into(), 50, 80);
//! let reports = run(&config)?;
//! for report in &reports {
//!     println!("{}: {} files", report.source.display(), report.written.len());
//! }
//! # Ok(())
//! # }
//! ```

use log::info;

pub mod config;
pub mod error;
pub mod inputs;
pub mod processing;

/// Re-export error types for convenience
pub use error::{ProduceError, ProduceResult};
pub use processing::{ImageTransformer, TransformReport, transform};

/// Main entry point for a producer run.
///
/// Validates `config`, resolves the input path and transforms every resolved file in
/// order, sequentially. The first failure ends the run; derivatives already written for
/// earlier files are left on disk.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid (zero percentage, quality above 100)
/// - The input directory cannot be listed
/// - Any source cannot be decoded, resized or encoded
/// - Any derivative cannot be written to the destination
pub fn run(config: &config::RunConfig) -> ProduceResult<Vec<TransformReport>> {
    config.check()?;

    info!("Input: {}", config.input.display());
    info!(
        "Destination: {}, Viewport: {}%, Quality: {}",
        config.destination.display(),
        config.percent_viewport,
        config.quality
    );

    let sources = inputs::resolve_inputs(&config.input)?;
    let mut transformer = ImageTransformer::new(config.percent_viewport, config.quality);

    let mut reports = Vec::with_capacity(sources.len());
    for source in &sources {
        reports.push(transformer.transform(source, &config.destination)?);
    }
    Ok(reports)
}
