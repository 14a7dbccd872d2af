//! # Processing Module
//!
//! This module contains the per-image pipeline: decode, resize to every target width,
//! blur the placeholder, encode and write.

pub mod encode;
pub mod processing;

// Re-export commonly used types for convenience
pub use encode::encode_jpeg;
pub use processing::{DerivativeKind, ImageTransformer, TransformReport, decode, transform};
