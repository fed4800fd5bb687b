// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

/// Scale limits for a [`crate::ZoomPanController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min_scale: f64,
    max_scale: f64,
}

impl ZoomLimits {
    /// Default minimum scale: the content fits the viewer.
    pub const MIN_SCALE: f64 = 1.0;
    /// Default maximum scale.
    pub const MAX_SCALE: f64 = 4.0;

    /// Creates limits from a scale range.
    ///
    /// The range is normalized so that `min_scale <= max_scale`. Scales must be
    /// positive; non-positive or non-finite values fall back to the defaults.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let min_scale = if valid(min_scale) {
            min_scale
        } else {
            Self::MIN_SCALE
        };
        let max_scale = if valid(max_scale) {
            max_scale
        } else {
            Self::MAX_SCALE
        };
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            min_scale,
            max_scale,
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::new(Self::MIN_SCALE, Self::MAX_SCALE)
    }
}

/// Committed zoom and pan values of a viewer.
///
/// `scale` and `translation` are what the renderer shows. The `base_*` fields
/// are the values at the start of the current gesture; gesture updates are
/// always applied to them, never to the previous frame.
///
/// Translation is measured in view pixels from the centered position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// Current scale.
    pub scale: f64,
    /// Current translation.
    pub translation: Vec2,
    /// Scale when the current gesture began.
    pub base_scale: f64,
    /// Translation when the current gesture began.
    pub base_translation: Vec2,
}

impl ZoomState {
    /// Unscaled, centered content.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
        base_scale: 1.0,
        base_translation: Vec2::ZERO,
    };

    /// Snapshots the current values as the gesture base.
    pub fn commit_base(&mut self) {
        self.base_scale = self.scale;
        self.base_translation = self.translation;
    }

    /// Transform from content coordinates to view coordinates.
    ///
    /// Content occupies `(0, 0)..content` when unscaled; scaling happens about
    /// the content center, followed by the translation.
    #[must_use]
    pub fn to_affine(&self, content: Size) -> Affine {
        let center = content.to_vec2() * 0.5;
        Affine::translate(center + self.translation)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }

    /// Interpolates between two states for presentation.
    ///
    /// `t = 0` gives `self`, `t = 1` gives `to`; the base values are taken from
    /// `to`.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            scale: self.scale + (to.scale - self.scale) * t,
            translation: self.translation.lerp(to.translation, t),
            base_scale: to.base_scale,
            base_translation: to.base_translation,
        }
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Largest allowed translation magnitude per axis at `scale`.
///
/// Content scaled by `scale` overhangs the viewer by `(scale - 1) * size / 2`
/// on each side; below scale `1` there is no overhang and no panning.
#[must_use]
pub fn translation_bounds(scale: f64, content: Size) -> Vec2 {
    let overhang = |dim: f64| {
        let b = (scale - 1.0) * dim / 2.0;
        if b.is_finite() { b.max(0.0) } else { 0.0 }
    };
    Vec2::new(overhang(content.width), overhang(content.height))
}

/// Clamps `translation` into the bounds for `scale`.
#[must_use]
pub fn clamp_translation(translation: Vec2, scale: f64, content: Size) -> Vec2 {
    let bound = translation_bounds(scale, content);
    Vec2::new(
        translation.x.clamp(-bound.x, bound.x),
        translation.y.clamp(-bound.y, bound.y),
    )
}
