// SPDX-License-Identifier: MIT
// CPU scaler built on fast_image_resize (SIMD-accelerated).
// RGB8 in → RGB8 out, Lanczos3 convolution, direct write into caller-provided dst buffer.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x3;
use fir::{FilterType, ResizeAlg, ResizeOptions, Resizer};

use crate::widths::{ScalePlan, Size};

const CHANNELS: usize = 3;

#[derive(Debug)]
pub enum ScaleError {
    InvalidDimensions(Size),
    BufferTooSmall { needed: usize, got: usize },
    Fir(fir::ResizeError),
    ImageBuf(fir::ImageBufferError),
}

impl From<fir::ResizeError> for ScaleError { fn from(e: fir::ResizeError) -> Self { Self::Fir(e) } }
impl From<fir::ImageBufferError> for ScaleError { fn from(e: fir::ImageBufferError) -> Self { Self::ImageBuf(e) } }

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::InvalidDimensions(size) => write!(f, "Invalid target dimensions {}x{}", size.w, size.h),
            ScaleError::BufferTooSmall { needed, got } => write!(f, "Output buffer too small: need {} bytes, got {}", needed, got),
            ScaleError::Fir(e) => write!(f, "Fast image resize error: {}", e),
            ScaleError::ImageBuf(e) => write!(f, "Image buffer error: {}", e),
        }
    }
}

impl std::error::Error for ScaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleError::Fir(e) => Some(e),
            ScaleError::ImageBuf(e) => Some(e),
            _ => None,
        }
    }
}

/// Byte length of a tightly packed RGB8 image of `size`.
#[inline]
pub fn rgb_len(size: Size) -> usize {
    (size.w as usize) * (size.h as usize) * CHANNELS
}

/// Resize a tightly packed RGB8 buffer according to `plan`.
/// `dst` must hold at least `plan.out.w * plan.out.h * 3` bytes; extra bytes are untouched.
pub fn scale_rgb_cpu(
    resizer: &mut Resizer,
    src_rgb: &[u8],
    plan: &ScalePlan,
    dst: &mut [u8],
) -> Result<(), ScaleError> {
    if plan.out.w == 0 || plan.out.h == 0 {
        return Err(ScaleError::InvalidDimensions(plan.out));
    }
    let dst_len = rgb_len(plan.out);
    if dst.len() < dst_len {
        return Err(ScaleError::BufferTooSmall { needed: dst_len, got: dst.len() });
    }

    let src_view = TypedImageRef::<U8x3>::from_buffer(plan.input.w, plan.input.h, src_rgb)?;
    let mut dst_image = TypedImage::<U8x3>::from_buffer(plan.out.w, plan.out.h, &mut dst[..dst_len])?;

    let opts = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer.resize_typed::<U8x3>(&src_view, &mut dst_image, &opts)?;

    Ok(())
}

/// Allocating variant of [`scale_rgb_cpu`]: returns a fresh `plan.out`-sized buffer.
pub fn scale_rgb_to_vec(
    resizer: &mut Resizer,
    src_rgb: &[u8],
    plan: &ScalePlan,
) -> Result<Vec<u8>, ScaleError> {
    if plan.out.w == 0 || plan.out.h == 0 {
        return Err(ScaleError::InvalidDimensions(plan.out));
    }
    let mut dst = vec![0u8; rgb_len(plan.out)];
    scale_rgb_cpu(resizer, src_rgb, plan, &mut dst)?;
    Ok(dst)
}
