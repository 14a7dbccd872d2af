//! Unit tests for JPEG encoding of derivatives.

use web_image_producer::processing::encode_jpeg;
use webimg_scale::widths::Size;

use crate::common::checkerboard;

#[test]
fn test_decodes_back_to_same_size() {
    let image = checkerboard(37, 21, 5);
    let size = Size { w: 37, h: 21 };

    let bytes = encode_jpeg(image.as_raw(), size, 80).unwrap();
    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();

    assert_eq!((decoded.width(), decoded.height()), (37, 21));
}

#[test]
fn test_quality_80_larger_than_20() {
    let image = checkerboard(128, 96, 3);
    let size = Size { w: 128, h: 96 };

    let high = encode_jpeg(image.as_raw(), size, 80).unwrap();
    let low = encode_jpeg(image.as_raw(), size, 20).unwrap();

    assert!(low.len() < high.len(), "q20 {} bytes vs q80 {} bytes", low.len(), high.len());
}

#[test]
fn test_quality_extremes_encode() {
    let image = checkerboard(16, 16, 2);
    let size = Size { w: 16, h: 16 };

    assert!(encode_jpeg(image.as_raw(), size, 0).is_ok());
    assert!(encode_jpeg(image.as_raw(), size, 100).is_ok());
}

#[test]
fn test_zero_sized_rejected() {
    assert!(encode_jpeg(&[], Size { w: 0, h: 10 }, 80).is_err());
}
