// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle constraint solver.
//!
//! [`resolve`] derives the rectangle for a drag from the rectangle at gesture
//! start, the zone that was grabbed and the *total* pointer delta since the
//! press. It never accumulates per-frame results, so a long drag cannot drift.
//!
//! Each axis is solved on its own, in two steps:
//!
//! 1. The extent (width or height) is adjusted by the delta for the edge the
//!    zone drags and clamped to `[min, display extent]`.
//! 2. The start (left or top) is derived from the already clamped extent:
//!    dragging the near edge keeps the far edge where it was, the center zone
//!    translates by the delta, and any other zone keeps the start. A rectangle
//!    that would run past the far image edge is pinned against it, and the
//!    start is finally clamped to `0`.
//!
//! Rejecting a frame is never necessary: any delta, however large, produces a
//! rectangle inside the image and at least as large as the minimum (capped at
//! the image size when the image is smaller than the minimum).
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_crop::{CropRect, ImageBounds, Zone, resolve};
//!
//! let bounds = ImageBounds::new(Size::new(300.0, 300.0), Size::new(3000.0, 3000.0));
//! let base = CropRect::new(10.0, 10.0, 100.0, 100.0);
//!
//! let out = resolve(Zone::TopLeft, base, Vec2::new(-20.0, -20.0), bounds, Size::new(60.0, 60.0));
//! assert_eq!(out, CropRect::new(0.0, 0.0, 120.0, 120.0));
//! ```

use kurbo::{Size, Vec2};

use crate::rect::{CropRect, ImageBounds, sanitize_min};
use crate::zone::{AxisHandle, Zone};

/// Solves the rectangle for `zone` dragged by `delta` from `base`.
///
/// `delta` is cumulative since the gesture started. Degenerate bounds or a
/// non-finite delta or base leave `base` unchanged.
#[must_use]
pub fn resolve(
    zone: Zone,
    base: CropRect,
    delta: Vec2,
    bounds: ImageBounds,
    min_size: Size,
) -> CropRect {
    if bounds.is_degenerate() || !delta.is_finite() || !base.is_finite() {
        return base;
    }
    let min_size = sanitize_min(min_size);
    let (left, width) = solve_axis(
        zone.horizontal(),
        base.left,
        base.width,
        delta.x,
        bounds.display.width,
        min_size.width,
    );
    let (top, height) = solve_axis(
        zone.vertical(),
        base.top,
        base.height,
        delta.y,
        bounds.display.height,
        min_size.height,
    );
    CropRect::new(top, left, width, height)
}

/// Forces `rect` into the editor invariant without moving any edge that is
/// already legal.
///
/// Used for restored selections and for the defensive re-clamp at commit.
#[must_use]
pub fn clamp_into(rect: CropRect, bounds: ImageBounds, min_size: Size) -> CropRect {
    if bounds.is_degenerate() {
        return rect;
    }
    if !rect.is_finite() {
        return bounds.full_rect();
    }
    let min_size = sanitize_min(min_size);
    let (left, width) = solve_axis(
        AxisHandle::Fixed,
        rect.left,
        rect.width,
        0.0,
        bounds.display.width,
        min_size.width,
    );
    let (top, height) = solve_axis(
        AxisHandle::Fixed,
        rect.top,
        rect.height,
        0.0,
        bounds.display.height,
        min_size.height,
    );
    CropRect::new(top, left, width, height)
}

/// Returns `(start, extent)` for one axis.
fn solve_axis(
    handle: AxisHandle,
    start: f64,
    len: f64,
    delta: f64,
    image_extent: f64,
    min: f64,
) -> (f64, f64) {
    let min = min.min(image_extent);
    let raw_len = match handle {
        AxisHandle::Start => len - delta,
        AxisHandle::End => len + delta,
        AxisHandle::Move | AxisHandle::Fixed => len,
    };
    let new_len = raw_len.max(min).min(image_extent);

    let candidate = match handle {
        // The far edge stays where it was.
        AxisHandle::Start => start + len - new_len,
        AxisHandle::Move => start + delta,
        AxisHandle::End | AxisHandle::Fixed => start,
    };
    let pinned = if candidate + new_len > image_extent {
        image_extent - new_len
    } else {
        candidate
    };
    (pinned.max(0.0), new_len)
}
