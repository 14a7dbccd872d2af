//! # Image Transformer
//!
//! Turns one source image into its full set of responsive derivatives.
//!
//! ## Pipeline
//!
//! 1. **Decode**: the source is opened once, its format sniffed from content, and normalized
//!    to packed RGB8
//! 2. **Plan**: target widths come from the device width table scaled by the viewport
//!    percentage; heights follow the source aspect ratio captured at decode time
//! 3. **Resize**: every derivative is resampled from the original pixels with Lanczos3
//! 4. **Placeholder**: half the smallest target width, box blurred with radius 3
//! 5. **Write**: each derivative is JPEG encoded and written to the destination directory
//!
//! Output names are `{stem}-{width}.jpg` and `{stem}-placeholder.jpg`, whatever the source
//! extension was. Failures are returned immediately; files already written stay in place.

use std::fs;
use std::path::{Path, PathBuf};

use fast_image_resize::Resizer;
use image::{ImageError, ImageReader, RgbImage};
use log::{debug, info};
use webimg_scale::blur::{PLACEHOLDER_BLUR_RADIUS, box_blur_rgb};
use webimg_scale::cpu::scale_rgb_to_vec;
use webimg_scale::widths::{Size, TargetWidths, compute_widths, placeholder_width, plan_for_width};

use crate::error::{ProduceError, ProduceResult};
use crate::processing::encode::encode_jpeg;

/// Which derivative a file holds; decides the file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeKind {
    /// Resized to exactly this width
    Sized(u32),
    /// Blurred lazy-loading placeholder
    Placeholder,
}

impl DerivativeKind {
    /// `photo` + `Sized(720)` -> `photo-720.jpg`
    pub fn file_name(self, stem: &str) -> String {
        match self {
            DerivativeKind::Sized(width) => format!("{stem}-{width}.jpg"),
            DerivativeKind::Placeholder => format!("{stem}-placeholder.jpg"),
        }
    }
}

/// What one source image produced.
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub source: PathBuf,
    /// Source dimensions at decode time
    pub input: Size,
    pub widths: TargetWidths,
    /// Written files in write order: one per target width, then the placeholder
    pub written: Vec<PathBuf>,
}

/// Open and decode `path` as RGB8. The format is detected from the file content.
pub fn decode(path: &Path) -> ProduceResult<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| ProduceError::decode(path, ImageError::IoError(e)))?;
    let image = reader.decode().map_err(|e| ProduceError::decode(path, e))?;
    Ok(image.to_rgb8())
}

/// Derivative producer for one viewport percentage and quality.
///
/// The resizer is reused across every derivative of every source handled by this instance.
pub struct ImageTransformer {
    pub percent_viewport: u32,
    pub quality: u8,
    pub resizer: Resizer,
}

impl ImageTransformer {
    pub fn new(percent_viewport: u32, quality: u8) -> Self {
        Self {
            percent_viewport,
            quality,
            resizer: Resizer::new(),
        }
    }

    /// Write all derivatives of `source` into `destination`.
    pub fn transform(&mut self, source: &Path, destination: &Path) -> ProduceResult<TransformReport> {
        let image = decode(source)?;
        let input = Size {
            w: image.width(),
            h: image.height(),
        };
        let widths = compute_widths(self.percent_viewport);
        debug!(
            "{}: {}x{} → widths {:?}",
            source.display(),
            input.w,
            input.h,
            widths.as_slice()
        );

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pixels = image.as_raw();
        let mut written = Vec::with_capacity(widths.len() + 1);

        for width in widths.iter() {
            let out_path = destination.join(DerivativeKind::Sized(width).file_name(&stem));
            let plan = plan_for_width(input, width);
            let resized = scale_rgb_to_vec(&mut self.resizer, pixels, &plan)
                .map_err(|e| ProduceError::scale(&out_path, "resize", e))?;
            self.write(&out_path, &resized, plan.out)?;
            written.push(out_path);
        }

        let out_path = destination.join(DerivativeKind::Placeholder.file_name(&stem));
        let plan = plan_for_width(input, placeholder_width(&widths).unwrap_or(0));
        let mut placeholder = scale_rgb_to_vec(&mut self.resizer, pixels, &plan)
            .map_err(|e| ProduceError::scale(&out_path, "placeholder resize", e))?;
        box_blur_rgb(&mut placeholder, plan.out, PLACEHOLDER_BLUR_RADIUS)
            .map_err(|e| ProduceError::scale(&out_path, "placeholder blur", e))?;
        self.write(&out_path, &placeholder, plan.out)?;
        written.push(out_path);

        info!(
            "{} → {} files in {}",
            source.display(),
            written.len(),
            destination.display()
        );

        Ok(TransformReport {
            source: source.to_path_buf(),
            input,
            widths,
            written,
        })
    }

    fn write(&self, path: &Path, pixels: &[u8], size: Size) -> ProduceResult<()> {
        let bytes = encode_jpeg(pixels, size, self.quality).map_err(|e| ProduceError::encode(path, e))?;
        fs::write(path, &bytes).map_err(|e| ProduceError::io("write derivative", path, e))?;
        debug!("Wrote {} ({}x{}, {} bytes)", path.display(), size.w, size.h, bytes.len());
        Ok(())
    }
}

/// Write all derivatives of `source` into `destination` with a fresh transformer.
pub fn transform(
    source: &Path,
    destination: &Path,
    percent_viewport: u32,
    quality: u8,
) -> ProduceResult<TransformReport> {
    ImageTransformer::new(percent_viewport, quality).transform(source, destination)
}
