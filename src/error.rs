//! # Error Handling
//!
//! Every failure in a run maps onto one [`ProduceError`] variant. There is no recovery
//! layer: errors carry enough context (the file involved and the step that failed) to be
//! reported once by the binary, and the run stops.
//!
//! ## Error Categories
//!
//! - `Config`: run parameters rejected before any image is touched
//! - `Decode`: the source could not be opened or decoded as an image
//! - `Scale`: resizing or blurring rejected the planned dimensions
//! - `Encode`: the JPEG encoder rejected the derivative
//! - `Io`: listing inputs or writing outputs failed
//!
//! ## Usage
//!
//! ```rust
//! use web_image_producer::error::ProduceError;
//!
//! let error = ProduceError::config("quality", "120", "must be between 0 and 100");
//! assert_eq!(error.category(), "config");
//! assert!(error.to_string().contains("quality"));
//! ```

use std::{
    error::Error as StdError,
    fmt,
    path::{Path, PathBuf},
};

use webimg_scale::cpu::ScaleError;

/// Base error type for the producer.
#[derive(Debug)]
pub enum ProduceError {
    /// Run configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
    },
    /// Source image could not be opened or decoded
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Resize or blur failure
    Scale {
        path: PathBuf,
        operation: String,
        source: ScaleError,
    },
    /// JPEG encoder failure
    Encode {
        path: PathBuf,
        reason: String,
    },
    /// I/O errors
    Io {
        operation: String,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ProduceError {
    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a decode error for `path`
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a scaling error for the derivative at `path`
    pub fn scale(path: impl AsRef<Path>, operation: impl Into<String>, source: ScaleError) -> Self {
        Self::Scale {
            path: path.as_ref().to_path_buf(),
            operation: operation.into(),
            source,
        }
    }

    /// Create an encoding error for the derivative at `path`
    pub fn encode(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The file this error is about, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Config { .. } => None,
            Self::Decode { path, .. }
            | Self::Scale { path, .. }
            | Self::Encode { path, .. }
            | Self::Io { path, .. } => Some(path),
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Decode { .. } => "decode",
            Self::Scale { .. } => "scale",
            Self::Encode { .. } => "encode",
            Self::Io { .. } => "io",
        }
    }
}

impl fmt::Display for ProduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProduceError::Config {
                field,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )
            }
            ProduceError::Decode { path, source } => {
                write!(f, "Failed to decode '{}': {}", path.display(), source)
            }
            ProduceError::Scale {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Scaling failed during {} for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            ProduceError::Encode { path, reason } => {
                write!(f, "JPEG encoding failed for '{}': {}", path.display(), reason)
            }
            ProduceError::Io {
                operation,
                path,
                source,
            } => {
                write!(
                    f,
                    "I/O error during {} on '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
        }
    }
}

impl StdError for ProduceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Scale { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias using our custom error type
pub type ProduceResult<T> = Result<T, ProduceError>;
