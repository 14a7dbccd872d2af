// SPDX-License-Identifier: MIT
//! # Width Table and Scale Plans
//!
//! Target widths are derived from a fixed table of popular full-screen device widths. A
//! viewport percentage scales every entry, so an image that fills half the viewport gets
//! derivatives at half of each device width.
//!
//! Heights are never planned independently: every plan derives its height from the
//! source aspect ratio, computed once as `height / width`.
//!
//! ## Rounding
//!
//! - Widths round up (`ceil`), so a derivative is never narrower than the slot it fills.
//! - Heights round half to even, matching the conventional `round()` of the widths in
//!   published srcset tables, and clamp to a minimum of 1px.

/// Pixel widths of full-screen mobile devices we want to target exactly, widest first.
pub const FULL_WIDTHS: [u32; 8] = [1440, 1242, 1125, 1080, 828, 750, 720, 640];

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    /// Height over width, the only aspect value plans are computed from.
    pub fn ratio(self) -> f64 {
        self.h as f64 / self.w as f64
    }
}

/// Ordered target widths for one run. Order follows the table (descending for
/// [`FULL_WIDTHS`]), duplicates are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetWidths(Vec<u32>);

impl TargetWidths {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last computed width. For a descending table this is the smallest one.
    pub fn smallest(&self) -> Option<u32> {
        self.0.last().copied()
    }
}

/// Compute target widths from the built-in device table.
pub fn compute_widths(percent_viewport: u32) -> TargetWidths {
    compute_widths_from(&FULL_WIDTHS, percent_viewport)
}

/// Compute `ceil(w * percent / 100)` for every table entry, preserving table order.
///
/// Integer ceiling division gives the exact result for integer percentages, without the
/// drift a float multiply by `0.01` can introduce.
pub fn compute_widths_from(table: &[u32], percent_viewport: u32) -> TargetWidths {
    let widths = table
        .iter()
        .map(|&w| {
            let scaled = (w as u64 * percent_viewport as u64).div_ceil(100);
            u32::try_from(scaled).unwrap_or(u32::MAX)
        })
        .collect();
    TargetWidths(widths)
}

/// Width of the lazy-loading placeholder: half the smallest target, rounded down.
pub fn placeholder_width(widths: &TargetWidths) -> Option<u32> {
    widths.smallest().map(|w| w / 2)
}

/// One resize step: where we start and what we produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalePlan {
    /// Original input dimensions
    pub input: Size,
    /// Final computed output dimensions
    pub out: Size,
}

/// Plan a resize of `input` to exactly `width` pixels wide, preserving aspect ratio.
///
/// A zero width is kept as-is so the resizer can reject it; zero heights from extremely
/// wide sources are clamped to 1px.
pub fn plan_for_width(input: Size, width: u32) -> ScalePlan {
    let h = (width as f64 * input.ratio()).round_ties_even();
    let h = if width == 0 { 0 } else { (h as u32).max(1) };
    ScalePlan {
        input,
        out: Size { w: width, h },
    }
}
