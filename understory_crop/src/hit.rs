// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone hit testing for crop rectangles.
//!
//! The rectangle is split into a uniform 3×3 grid of `width / 3` by
//! `height / 3` cells. A pointer-down is classified once, at gesture start,
//! and the resulting [`Zone`] is kept for the whole gesture.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_crop::{CropRect, Zone, classify};
//!
//! let rect = CropRect::new(0.0, 0.0, 90.0, 90.0);
//! assert_eq!(classify(Point::new(5.0, 5.0), rect, Vec2::ZERO), Some(Zone::TopLeft));
//! assert_eq!(classify(Point::new(45.0, 45.0), rect, Vec2::ZERO), Some(Zone::Center));
//! assert_eq!(classify(Point::new(95.0, 45.0), rect, Vec2::ZERO), None);
//! ```

use kurbo::{Point, Vec2};

use crate::rect::CropRect;
use crate::zone::Zone;

/// Classifies `pointer` against the 3×3 grid of `rect`.
///
/// `pointer` is in the same coordinate space as the event source (page or
/// container); `origin_offset` is the position of the image's top-left corner
/// in that space and is subtracted first.
///
/// Returns `None` when the pointer lies outside the rectangle, when the
/// rectangle is empty, or when any input is not finite. The far edges count as
/// inside, so a press exactly on the right or bottom border still hits.
#[must_use]
pub fn classify(pointer: Point, rect: CropRect, origin_offset: Vec2) -> Option<Zone> {
    if !rect.is_finite() || !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let local = pointer - origin_offset - rect.origin().to_vec2();
    let col = cell(local.x, rect.width)?;
    let row = cell(local.y, rect.height)?;
    Zone::from_cell(col, row)
}

fn cell(offset: f64, extent: f64) -> Option<usize> {
    // NaN is never contained.
    if !(0.0..=extent).contains(&offset) {
        return None;
    }
    let third = extent / 3.0;
    Some(if offset < third {
        0
    } else if offset < third * 2.0 {
        1
    } else {
        2
    })
}
