// SPDX-License-Identifier: MIT
//! Box blur for placeholder images.
//!
//! Each output pixel is the mean of the `(2r + 1) x (2r + 1)` square around it. The filter is
//! separable, so it runs as a horizontal pass followed by a vertical pass. Samples outside the
//! image repeat the nearest edge pixel.

use crate::cpu::{rgb_len, ScaleError};
use crate::widths::Size;

/// Radius used for lazy-loading placeholders.
pub const PLACEHOLDER_BLUR_RADIUS: u32 = 3;

const CHANNELS: usize = 3;

/// Blur a tightly packed RGB8 buffer in place.
pub fn box_blur_rgb(pixels: &mut [u8], size: Size, radius: u32) -> Result<(), ScaleError> {
    if size.w == 0 || size.h == 0 {
        return Err(ScaleError::InvalidDimensions(size));
    }
    let needed = rgb_len(size);
    if pixels.len() < needed {
        return Err(ScaleError::BufferTooSmall { needed, got: pixels.len() });
    }
    if radius == 0 {
        return Ok(());
    }

    let (w, h) = (size.w as usize, size.h as usize);
    let r = radius as usize;
    let mut scratch = vec![0u8; needed];

    // rows: pixels -> scratch
    for y in 0..h {
        let row = y * w * CHANNELS;
        blur_line(&pixels[row..], &mut scratch[row..], w, CHANNELS, r);
    }
    // columns: scratch -> pixels
    for x in 0..w {
        let col = x * CHANNELS;
        blur_line(&scratch[col..], &mut pixels[col..], h, w * CHANNELS, r);
    }

    Ok(())
}

/// Blur `len` pixels spaced `stride` bytes apart, reading `src` and writing `dst`.
/// Uses a running sum so the cost per pixel does not depend on the radius.
fn blur_line(src: &[u8], dst: &mut [u8], len: usize, stride: usize, r: usize) {
    let window = (2 * r + 1) as u32;
    let at = |i: isize, c: usize| -> u32 {
        let i = i.clamp(0, len as isize - 1) as usize;
        src[i * stride + c] as u32
    };

    for c in 0..CHANNELS {
        let mut sum: u32 = (-(r as isize)..=r as isize).map(|i| at(i, c)).sum();
        for i in 0..len {
            dst[i * stride + c] = ((sum + window / 2) / window) as u8;
            let incoming = i as isize + r as isize + 1;
            let outgoing = i as isize - r as isize;
            sum = sum + at(incoming, c) - at(outgoing, c);
        }
    }
}
