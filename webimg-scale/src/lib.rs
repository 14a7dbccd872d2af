// SPDX-License-Identifier: MIT
//! # webimg-scale: Responsive Width Planning and CPU Scaling
//!
//! This crate holds the pure pixel-level core of the responsive image producer. It knows
//! nothing about files or JPEG; it turns a viewport percentage into target widths, target
//! widths into aspect-preserving scale plans, and plans into resized RGB8 buffers.
//!
//! ## Key Components
//!
//! - [`widths`]: The device width table, target width computation and scale plans
//! - [`cpu`]: Lanczos resizing of packed RGB8 buffers using fast_image_resize
//! - [`blur`]: Fixed-radius box blur used for lazy-loading placeholders
//!
//! ## Usage Example
//!
//! ```rust
//! use webimg_scale::widths::{compute_widths, plan_for_width, placeholder_width, Size};
//!
//! let widths = compute_widths(50);
//! assert_eq!(widths.as_slice(), &[720, 621, 563, 540, 414, 375, 360, 320]);
//!
//! let plan = plan_for_width(Size { w: 1200, h: 800 }, 720);
//! assert_eq!((plan.out.w, plan.out.h), (720, 480));
//!
//! assert_eq!(placeholder_width(&widths), Some(160));
//! ```

pub mod blur;
pub mod cpu;
pub mod widths;
