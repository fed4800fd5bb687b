// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between display space and source pixel space.
//!
//! Both functions are pure: mapping the same rectangle twice yields the same
//! result, and nothing is cached between calls.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::error::GeometryError;
use crate::rect::{CropRect, ImageBounds, SourceRect};

/// Maps a display-space rectangle to integer source pixels.
///
/// Each axis is scaled by `source / display` and rounded. The result is then
/// clamped into the source image so rounding can never push the region a
/// pixel past the right or bottom edge. A non-empty source always yields at
/// least a 1×1 region.
///
/// ```
/// use kurbo::Size;
/// use understory_crop::{CropRect, ImageBounds, SourceRect, to_source};
///
/// let bounds = ImageBounds::new(Size::new(300.0, 200.0), Size::new(3000.0, 2000.0));
/// let rect = CropRect::new(10.0, 20.0, 100.0, 50.0);
/// assert_eq!(to_source(rect, bounds), Ok(SourceRect::new(200, 100, 1000, 500)));
/// ```
pub fn to_source(rect: CropRect, bounds: ImageBounds) -> Result<SourceRect, GeometryError> {
    check_bounds(bounds)?;
    if !rect.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    let max_w = to_pixel(bounds.source.width);
    let max_h = to_pixel(bounds.source.height);
    if max_w == 0 || max_h == 0 {
        return Err(GeometryError::Degenerate {
            width: bounds.source.width,
            height: bounds.source.height,
        });
    }

    let scale = bounds.display_to_source_scale();
    let origin_x = to_pixel(rect.left * scale.x).min(max_w - 1);
    let origin_y = to_pixel(rect.top * scale.y).min(max_h - 1);
    let width = to_pixel(rect.width * scale.x).clamp(1, max_w - origin_x);
    let height = to_pixel(rect.height * scale.y).clamp(1, max_h - origin_y);
    Ok(SourceRect::new(origin_x, origin_y, width, height))
}

/// Maps a source pixel region back into display space.
///
/// Used to restore a previously committed crop over a freshly laid-out image.
/// The result is not clamped to a minimum size; pass it through the editor to
/// re-establish the invariant.
pub fn to_display(rect: SourceRect, bounds: ImageBounds) -> Result<CropRect, GeometryError> {
    check_bounds(bounds)?;
    let sx = bounds.display.width / bounds.source.width;
    let sy = bounds.display.height / bounds.source.height;
    let r = rect.to_rect();
    let left = (r.x0 * sx).min(bounds.display.width);
    let top = (r.y0 * sy).min(bounds.display.height);
    let width = (r.width() * sx).min(bounds.display.width - left);
    let height = (r.height() * sy).min(bounds.display.height - top);
    Ok(CropRect::new(top, left, width, height))
}

fn check_bounds(bounds: ImageBounds) -> Result<(), GeometryError> {
    if bounds.is_degenerate() {
        let size = if crate::rect::is_positive_size(bounds.display) {
            bounds.source
        } else {
            bounds.display
        };
        return Err(GeometryError::Degenerate {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "inputs are finite and non-negative after `max`; `as` saturates above u32::MAX"
)]
fn to_pixel(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    fn bounds() -> ImageBounds {
        ImageBounds::new(Size::new(300.0, 200.0), Size::new(4032.0, 3024.0))
    }

    #[test]
    fn full_display_maps_to_full_source() {
        let b = bounds();
        let src = to_source(b.full_rect(), b).unwrap();
        assert_eq!(src, SourceRect::new(0, 0, 4032, 3024));
    }

    #[test]
    fn rounding_never_overflows_the_source() {
        // 1001 / 3 = 333.67 source px per display unit on x.
        let b = ImageBounds::new(Size::new(3.0, 3.0), Size::new(1001.0, 1001.0));
        let rect = CropRect::new(1.0, 1.0, 2.0, 2.0);
        let src = to_source(rect, b).unwrap();
        assert_eq!(src.origin_x, 334);
        assert!(src.origin_x + src.width <= 1001);
        assert!(src.origin_y + src.height <= 1001);
        assert_eq!(src.width, 1001 - 334);
    }

    #[test]
    fn mapping_is_idempotent() {
        let b = bounds();
        let rect = CropRect::new(12.3, 45.6, 78.9, 101.1);
        assert_eq!(to_source(rect, b), to_source(rect, b));
    }

    #[test]
    fn tiny_rect_keeps_one_pixel() {
        let b = ImageBounds::new(Size::new(1000.0, 1000.0), Size::new(10.0, 10.0));
        let src = to_source(CropRect::new(999.0, 999.0, 0.01, 0.01), b).unwrap();
        assert_eq!(src, SourceRect::new(9, 9, 1, 1));
    }

    #[test]
    fn degenerate_sizes_are_errors() {
        let rect = CropRect::new(0.0, 0.0, 10.0, 10.0);
        let no_layout = ImageBounds::new(Size::new(0.0, 200.0), Size::new(100.0, 100.0));
        assert_eq!(
            to_source(rect, no_layout),
            Err(GeometryError::Degenerate {
                width: 0.0,
                height: 200.0
            })
        );
        let no_source = ImageBounds::new(Size::new(10.0, 10.0), Size::new(100.0, 0.0));
        assert!(matches!(
            to_source(rect, no_source),
            Err(GeometryError::Degenerate { .. })
        ));
        let sub_pixel = ImageBounds::new(Size::new(10.0, 10.0), Size::new(0.2, 100.0));
        assert!(to_source(rect, sub_pixel).is_err());
    }

    #[test]
    fn non_finite_rect_is_error() {
        let rect = CropRect::new(f64::INFINITY, 0.0, 10.0, 10.0);
        assert_eq!(to_source(rect, bounds()), Err(GeometryError::NonFinite));
    }

    #[test]
    fn display_roundtrip_is_close() {
        let b = bounds();
        let rect = CropRect::new(20.0, 30.0, 150.0, 100.0);
        let back = to_display(to_source(rect, b).unwrap(), b).unwrap();
        let px = 300.0 / 4032.0;
        assert!((back.left - rect.left).abs() <= px);
        assert!((back.top - rect.top).abs() <= px);
        assert!((back.width - rect.width).abs() <= px);
        assert!((back.height - rect.height).abs() <= px);
    }
}
