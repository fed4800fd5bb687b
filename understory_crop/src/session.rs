// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::hit::classify;
use crate::rect::{CropRect, ImageBounds};
use crate::solver::resolve;
use crate::zone::Zone;

/// One crop drag, from pointer-down to release.
///
/// The zone and the starting rectangle are fixed when the session begins.
/// Every update re-solves from that snapshot with the cumulative delta, so the
/// zone stays the same no matter how far the pointer travels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    zone: Zone,
    rect_at_start: CropRect,
    cumulative_delta: Vec2,
}

impl GestureSession {
    /// Starts a session if `pointer` hits `rect`.
    ///
    /// See [`classify`] for the meaning of `origin_offset`. A miss returns
    /// `None` and no drag takes place.
    #[must_use]
    pub fn begin(pointer: Point, rect: CropRect, origin_offset: Vec2) -> Option<Self> {
        classify(pointer, rect, origin_offset).map(|zone| Self::with_zone(zone, rect))
    }

    /// Starts a session for an already known zone.
    #[must_use]
    pub fn with_zone(zone: Zone, rect: CropRect) -> Self {
        Self {
            zone,
            rect_at_start: rect,
            cumulative_delta: Vec2::ZERO,
        }
    }

    /// The grabbed zone.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Rectangle at pointer-down.
    #[must_use]
    pub fn rect_at_start(&self) -> CropRect {
        self.rect_at_start
    }

    /// Last accepted cumulative delta.
    #[must_use]
    pub fn cumulative_delta(&self) -> Vec2 {
        self.cumulative_delta
    }

    /// Records the cumulative `delta` and returns the rectangle to display.
    ///
    /// A non-finite delta is dropped and the last valid rectangle is returned
    /// again.
    pub fn update(&mut self, delta: Vec2, bounds: ImageBounds, min_size: Size) -> CropRect {
        if delta.is_finite() {
            self.cumulative_delta = delta;
        }
        self.current(bounds, min_size)
    }

    /// Ends the session with the final cumulative `delta`.
    #[must_use]
    pub fn finish(mut self, delta: Vec2, bounds: ImageBounds, min_size: Size) -> CropRect {
        self.update(delta, bounds, min_size)
    }

    /// Rectangle for the last accepted delta.
    #[must_use]
    pub fn current(&self, bounds: ImageBounds, min_size: Size) -> CropRect {
        resolve(
            self.zone,
            self.rect_at_start,
            self.cumulative_delta,
            bounds,
            min_size,
        )
    }
}
