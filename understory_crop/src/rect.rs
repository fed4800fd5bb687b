// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crop geometry value types: display-space rectangles, image bounds, and
//! source-space pixel regions.

use kurbo::{Point, Rect, Size, Vec2};

/// Slack used when checking containment of solver output.
///
/// Pinning computes `top = extent - height`, which may land a few ULPs past
/// the edge once added back.
pub(crate) const CONTAINMENT_EPSILON: f64 = 1e-6;

/// A crop rectangle in display space.
///
/// Display space is the image as laid out on screen, after any fit-to-container
/// scaling, with the image's top-left corner at the origin.
///
/// The rectangle the editor shows always satisfies:
/// - `top >= 0` and `left >= 0`,
/// - `top + height <= display height` and `left + width <= display width`,
/// - `width >= min width` and `height >= min height` (capped by the display
///   size when the image is smaller than the minimum).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CropRect {
    /// Distance from the image's top edge.
    pub top: f64,
    /// Distance from the image's left edge.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl CropRect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Creates a rectangle covering `size` from the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Converts a `kurbo` rectangle; the input is normalized first.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.y0, rect.x0, rect.width(), rect.height())
    }

    /// Converts into a `kurbo` rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Width and height.
    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge, `left + width`.
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge, `top + height`.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Returns `true` if every field is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Checks the editor invariant against a display size and minimum size.
    ///
    /// The minimum is sanitized and capped at the display size, matching the
    /// solver.
    #[must_use]
    pub fn fits_within(self, display: Size, min_size: Size) -> bool {
        let eps = CONTAINMENT_EPSILON;
        let min_size = sanitize_min(min_size);
        let min_w = min_size.width.min(display.width);
        let min_h = min_size.height.min(display.height);
        self.is_finite()
            && self.left >= -eps
            && self.top >= -eps
            && self.right() <= display.width + eps
            && self.bottom() <= display.height + eps
            && self.width >= min_w - eps
            && self.height >= min_h - eps
    }
}

impl From<Rect> for CropRect {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<CropRect> for Rect {
    fn from(rect: CropRect) -> Self {
        rect.to_rect()
    }
}

/// Display and source dimensions of one loaded image.
///
/// Set once per image load, after the rendered layout is measured and the
/// source image's natural pixel size is known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageBounds {
    /// Size of the image as laid out on screen.
    pub display: Size,
    /// Natural pixel size of the original image.
    pub source: Size,
}

impl ImageBounds {
    /// Creates bounds from measured display and source sizes.
    #[must_use]
    pub const fn new(display: Size, source: Size) -> Self {
        Self { display, source }
    }

    /// Bounds for `source` laid out to fit inside `container`, preserving the
    /// aspect ratio.
    ///
    /// A degenerate source or container yields a zero display size.
    #[must_use]
    pub fn fit(container: Size, source: Size) -> Self {
        if !is_positive_size(container) || !is_positive_size(source) {
            return Self::new(Size::ZERO, source);
        }
        let sx = container.width / source.width;
        let sy = container.height / source.height;
        let scale = sx.min(sy);
        Self::new(
            Size::new(source.width * scale, source.height * scale),
            source,
        )
    }

    /// Returns `true` if either size is empty or not finite.
    ///
    /// Nothing can be edited or mapped against degenerate bounds.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !is_positive_size(self.display) || !is_positive_size(self.source)
    }

    /// The rectangle covering the whole displayed image.
    #[must_use]
    pub fn full_rect(&self) -> CropRect {
        CropRect::from_size(self.display)
    }

    /// Source pixels per display unit along each axis.
    #[must_use]
    pub fn display_to_source_scale(&self) -> Vec2 {
        Vec2::new(
            self.source.width / self.display.width,
            self.source.height / self.display.height,
        )
    }
}

/// Negative and non-finite minimum extents become `0`.
pub(crate) fn sanitize_min(min_size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(clean(min_size.width), clean(min_size.height))
}

pub(crate) fn is_positive_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// A crop region in source pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceRect {
    /// Left pixel column.
    pub origin_x: u32,
    /// Top pixel row.
    pub origin_y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SourceRect {
    /// Creates a pixel region.
    #[must_use]
    pub const fn new(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Converts into a `kurbo` rectangle in source coordinates.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.origin_x),
            f64::from(self.origin_y),
            f64::from(self.origin_x) + f64::from(self.width),
            f64::from(self.origin_y) + f64::from(self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kurbo_conversion_roundtrip() {
        let crop = CropRect::new(10.0, 20.0, 30.0, 40.0);
        let rect = crop.to_rect();
        assert_eq!(rect, Rect::new(20.0, 10.0, 50.0, 50.0));
        assert_eq!(CropRect::from(rect), crop);
    }

    #[test]
    fn from_rect_normalizes_flipped_input() {
        let crop = CropRect::from_rect(Rect::new(50.0, 50.0, 20.0, 10.0));
        assert_eq!(crop, CropRect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let bounds = ImageBounds::fit(Size::new(300.0, 300.0), Size::new(4000.0, 3000.0));
        assert_eq!(bounds.display, Size::new(300.0, 225.0));
        assert!(!bounds.is_degenerate());

        let tall = ImageBounds::fit(Size::new(300.0, 300.0), Size::new(1000.0, 2000.0));
        assert_eq!(tall.display, Size::new(150.0, 300.0));
    }

    #[test]
    fn fit_with_unmeasured_container_is_degenerate() {
        let bounds = ImageBounds::fit(Size::ZERO, Size::new(4000.0, 3000.0));
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn degenerate_detection() {
        let ok = ImageBounds::new(Size::new(10.0, 10.0), Size::new(100.0, 100.0));
        assert!(!ok.is_degenerate());
        let zero = ImageBounds::new(Size::new(0.0, 10.0), Size::new(100.0, 100.0));
        assert!(zero.is_degenerate());
        let nan = ImageBounds::new(Size::new(10.0, 10.0), Size::new(f64::NAN, 100.0));
        assert!(nan.is_degenerate());
    }

    #[test]
    fn fits_within_caps_minimum_at_display_size() {
        let display = Size::new(40.0, 40.0);
        let min = Size::new(60.0, 60.0);
        assert!(CropRect::from_size(display).fits_within(display, min));
        assert!(!CropRect::new(0.0, 1.0, 40.0, 40.0).fits_within(display, min));
    }

    #[test]
    fn fits_within_treats_non_finite_minimum_as_zero() {
        let display = Size::new(300.0, 300.0);
        let min = Size::new(f64::NAN, f64::INFINITY);
        assert!(CropRect::new(0.0, 0.0, 200.0, 10.0).fits_within(display, min));
    }

    #[test]
    fn source_rect_to_kurbo() {
        let r = SourceRect::new(1, 2, 3, 4);
        assert_eq!(r.to_rect(), Rect::new(1.0, 2.0, 4.0, 6.0));
    }
}
