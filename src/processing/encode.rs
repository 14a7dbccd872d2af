//! JPEG encoding of RGB8 derivatives.

use jpeg_encoder::{ColorType, Encoder};
use webimg_scale::widths::Size;

/// Encode packed RGB8 `pixels` as a baseline JPEG at `quality` (0-100).
///
/// Huffman tables are optimized for the image, which shrinks the output without touching
/// pixel data. JPEG dimensions are 16-bit, so anything wider or taller than 65535 fails.
pub fn encode_jpeg(pixels: &[u8], size: Size, quality: u8) -> Result<Vec<u8>, String> {
    let width = u16::try_from(size.w)
        .map_err(|_| format!("width {} exceeds the JPEG limit of {}", size.w, u16::MAX))?;
    let height = u16::try_from(size.h)
        .map_err(|_| format!("height {} exceeds the JPEG limit of {}", size.h, u16::MAX))?;

    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, quality);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(pixels, width, height, ColorType::Rgb)
        .map_err(|e| format!("JPEG encode error: {e}"))?;
    Ok(buf)
}
