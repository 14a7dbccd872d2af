//! # Run Configuration
//!
//! The parameters of one producer run, independent of how they were collected.
//!
//! | Parameter | Type | Range | Description |
//! |-----------|------|-------|-------------|
//! | `input` | `PathBuf` | Any path | Image file, or directory of image files |
//! | `destination` | `PathBuf` | Existing directory | Where derivatives are written |
//! | `percent_viewport` | `u32` | > 0 | Share of the viewport width the image fills |
//! | `quality` | `u8` | 0-100 | JPEG quality for every derivative |
//!
//! ## Examples
//!
//! ```rust
//! use web_image_producer::config::RunConfig;
//!
//! let config = RunConfig::new("photos/".into(), "public/img".into(), 50, 80);
//! assert!(config.validate().is_ok());
//!
//! let config = RunConfig { percent_viewport: 0, ..config };
//! assert!(config.validate().is_err());
//! ```

use std::path::PathBuf;

use crate::error::{ProduceError, ProduceResult};

/// JPEG quality used when none is given.
pub const DEFAULT_QUALITY: u8 = 80;

/// Configuration for a single run over one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Image file, or directory whose direct files are all processed.
    pub input: PathBuf,

    /// Output directory. It must already exist; it is never created.
    pub destination: PathBuf,

    /// Percentage of the viewport width the image occupies on the page.
    ///
    /// Every device width in the table is scaled by `percent_viewport / 100`.
    /// Values above 100 are allowed and produce wider derivatives.
    pub percent_viewport: u32,

    /// JPEG quality, 0 (smallest) to 100 (best).
    pub quality: u8,
}

impl Default for RunConfig {
    /// Full-width images from the current directory into itself at quality 80.
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            destination: PathBuf::from("."),
            percent_viewport: 100,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl RunConfig {
    pub fn new(input: PathBuf, destination: PathBuf, percent_viewport: u32, quality: u8) -> Self {
        Self {
            input,
            destination,
            percent_viewport,
            quality,
        }
    }

    /// Validates the configuration parameters.
    ///
    /// A zero percentage would plan zero-width derivatives, so it is rejected here instead
    /// of failing inside the resizer halfway through a batch.
    pub fn validate(&self) -> Result<(), String> {
        if self.percent_viewport == 0 {
            return Err("Viewport percentage must be greater than 0".to_string());
        }
        if self.quality > 100 {
            return Err("Quality must be between 0 and 100".to_string());
        }
        Ok(())
    }

    /// [`validate`](Self::validate), reported as a [`ProduceError`].
    pub fn check(&self) -> ProduceResult<()> {
        self.validate().map_err(|reason| {
            let (field, value) = if self.percent_viewport == 0 {
                ("percent_viewport", self.percent_viewport.to_string())
            } else {
                ("quality", self.quality.to_string())
            };
            ProduceError::config(field, value, reason)
        })
    }
}
