//! Unit tests for width computation and scale planning through the public API.

use webimg_scale::widths::{
    FULL_WIDTHS, Size, compute_widths, compute_widths_from, placeholder_width, plan_for_width,
};

use crate::common::HALF_VIEWPORT_WIDTHS;

#[test]
fn test_always_eight_widths_in_table_order() {
    for percent in 1..=200 {
        let widths = compute_widths(percent);
        assert_eq!(widths.len(), 8);
        assert!(
            widths.as_slice().windows(2).all(|w| w[0] >= w[1]),
            "not descending at {percent}%: {:?}",
            widths.as_slice()
        );
        for (got, full) in widths.iter().zip(FULL_WIDTHS) {
            assert_eq!(got, (full * percent).div_ceil(100));
            assert!(got > 0);
        }
    }
}

#[test]
fn test_half_viewport_matches_fixture() {
    assert_eq!(compute_widths(50).as_slice(), &HALF_VIEWPORT_WIDTHS);
}

#[test]
fn test_heights_follow_source_ratio() {
    let sources = [Size { w: 1200, h: 800 }, Size { w: 800, h: 1200 }, Size { w: 1920, h: 1080 }];
    for input in sources {
        let ratio = input.h as f64 / input.w as f64;
        for width in compute_widths(50).iter() {
            let plan = plan_for_width(input, width);
            assert_eq!(plan.out.w, width);
            let exact = width as f64 * ratio;
            assert!((plan.out.h as f64 - exact).abs() <= 0.5, "{width} -> {}", plan.out.h);
        }
    }
}

#[test]
fn test_heights_round_half_to_even() {
    // 3 * 0.5 = 1.5 -> 2, 5 * 0.5 = 2.5 -> 2
    let input = Size { w: 2, h: 1 };
    assert_eq!(plan_for_width(input, 3).out.h, 2);
    assert_eq!(plan_for_width(input, 5).out.h, 2);
    assert_eq!(plan_for_width(input, 7).out.h, 4);
}

#[test]
fn test_placeholder_is_half_of_smallest() {
    for percent in [1, 10, 33, 50, 75, 100, 150] {
        let widths = compute_widths(percent);
        let smallest = *widths.as_slice().iter().min().unwrap();
        assert_eq!(placeholder_width(&widths), Some(smallest / 2));
    }
}

#[test]
fn test_custom_table_is_scaled_verbatim() {
    let widths = compute_widths_from(&[2000, 1000, 1000], 50);
    assert_eq!(widths.as_slice(), &[1000, 500, 500]);
}
