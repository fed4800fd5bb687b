// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side crop editor state.
//!
//! [`CropEditor`] owns the single piece of state that survives between
//! gestures (the committed rectangle) together with the measured image bounds,
//! the accumulated rotation and the active [`GestureSession`], if any. It feeds
//! [`GestureEvent`]s through the pure hit tester and solver and maps the result
//! to source pixels on commit.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_crop::{CropConfig, CropEditor, CropRect, ImageBounds};
//! use understory_event_state::gesture::GestureEvent;
//!
//! let mut editor = CropEditor::new(CropConfig::default());
//! editor.set_image(ImageBounds::new(Size::new(300.0, 200.0), Size::new(3000.0, 2000.0)));
//!
//! // Grab the bottom-right corner and pull it inwards.
//! editor.handle(GestureEvent::Begin { position: Point::new(290.0, 190.0) });
//! editor.handle(GestureEvent::End { translation: Vec2::new(-100.0, -50.0) });
//! assert_eq!(editor.rectangle(), CropRect::new(0.0, 0.0, 200.0, 150.0));
//!
//! let request = editor.commit("photo.png").unwrap();
//! assert_eq!(request.region.width, 2000);
//! ```

use kurbo::{Size, Vec2};
use understory_event_state::gesture::GestureEvent;

use crate::commit::{CropRequest, ImageTransformer, OutputFormat, Rotation};
use crate::error::{CropError, GeometryError};
use crate::mapper::to_source;
use crate::rect::{CropRect, ImageBounds, sanitize_min};
use crate::session::GestureSession;
use crate::solver::clamp_into;
use crate::zone::Zone;

/// Editor configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropConfig {
    /// Smallest rectangle the user can drag to, in display units.
    pub min_size: Size,
}

impl CropConfig {
    /// Default minimum width and height.
    pub const DEFAULT_MIN_SIZE: Size = Size::new(60.0, 60.0);

    /// Creates a config; negative or non-finite minimums become `0`.
    #[must_use]
    pub fn new(min_size: Size) -> Self {
        Self {
            min_size: sanitize_min(min_size),
        }
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_SIZE)
    }
}

/// Crop editor for one displayed image at a time.
#[derive(Clone, Debug)]
pub struct CropEditor {
    config: CropConfig,
    bounds: Option<ImageBounds>,
    rect: CropRect,
    session: Option<GestureSession>,
    rotation: Rotation,
    origin_offset: Vec2,
    generation: u64,
}

impl CropEditor {
    /// Creates an editor with no image.
    #[must_use]
    pub fn new(config: CropConfig) -> Self {
        Self {
            config,
            bounds: None,
            rect: CropRect::default(),
            session: None,
            rotation: Rotation::Deg0,
            origin_offset: Vec2::ZERO,
            generation: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> CropConfig {
        self.config
    }

    /// Sets the position of the image's top-left corner in the coordinate
    /// space of incoming [`GestureEvent::Begin`] positions.
    pub fn set_origin_offset(&mut self, offset: Vec2) {
        self.origin_offset = offset;
    }

    /// Loads a new image.
    ///
    /// The rectangle is reset to cover the whole displayed image, any drag in
    /// progress is discarded and the rotation is cleared. Results of requests
    /// made against the previous image are no longer [accepted](Self::accepts).
    pub fn set_image(&mut self, bounds: ImageBounds) {
        self.generation += 1;
        self.session = None;
        self.rotation = Rotation::Deg0;
        self.bounds = Some(bounds);
        if bounds.is_degenerate() {
            tracing::warn!(?bounds, "crop image measured with degenerate size");
            self.rect = CropRect::default();
        } else {
            self.rect = bounds.full_rect();
        }
        tracing::debug!(generation = self.generation, "crop image loaded");
    }

    /// Re-lays out the current image at a new display size.
    ///
    /// The selection keeps covering the same part of the image. In-flight
    /// requests are invalidated because the host is expected to re-commit.
    /// An unchanged size is a no-op and keeps any drag in progress.
    pub fn set_display_size(&mut self, display: Size) {
        let Some(old) = self.bounds else {
            return;
        };
        if old.display == display {
            return;
        }
        let new = ImageBounds::new(display, old.source);
        self.generation += 1;
        self.session = None;
        self.bounds = Some(new);
        if new.is_degenerate() {
            tracing::warn!(bounds = ?new, "crop image re-laid out with degenerate size");
            return;
        }
        if old.is_degenerate() {
            self.rect = new.full_rect();
            return;
        }
        let sx = display.width / old.display.width;
        let sy = display.height / old.display.height;
        let scaled = CropRect::new(
            self.rect.top * sy,
            self.rect.left * sx,
            self.rect.width * sx,
            self.rect.height * sy,
        );
        self.rect = clamp_into(scaled, new, self.config.min_size);
    }

    /// Returns the measured bounds of the current image.
    #[must_use]
    pub fn bounds(&self) -> Option<ImageBounds> {
        self.bounds
    }

    /// Returns the rectangle to display.
    #[must_use]
    pub fn rectangle(&self) -> CropRect {
        self.rect
    }

    /// Replaces the selection, for example with a restored crop.
    ///
    /// The rectangle is clamped into the image and up to the minimum size.
    /// Ignored while a drag is in progress or before an image is measured.
    pub fn set_rectangle(&mut self, rect: CropRect) {
        if self.session.is_some() {
            return;
        }
        if let Some(bounds) = self.bounds.filter(|b| !b.is_degenerate()) {
            self.rect = clamp_into(rect, bounds, self.config.min_size);
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Zone grabbed by the drag in progress.
    #[must_use]
    pub fn active_zone(&self) -> Option<Zone> {
        self.session.map(|s| s.zone())
    }

    /// Feeds one pointer event.
    ///
    /// Returns the rectangle to display after the event, or `None` if the
    /// event was ignored (a press outside the rectangle, or movement with no
    /// drag in progress). `Cancel` finishes the drag exactly like `End`.
    pub fn handle(&mut self, event: GestureEvent) -> Option<CropRect> {
        let bounds = self.bounds?;
        let min_size = self.config.min_size;
        match event {
            GestureEvent::Begin { position } => {
                self.session = GestureSession::begin(position, self.rect, self.origin_offset);
                let session = self.session?;
                tracing::trace!(zone = ?session.zone(), "crop drag started");
                Some(self.rect)
            }
            GestureEvent::Update { translation } => {
                let session = self.session.as_mut()?;
                self.rect = session.update(translation, bounds, min_size);
                Some(self.rect)
            }
            GestureEvent::End { translation } | GestureEvent::Cancel { translation } => {
                let session = self.session.take()?;
                self.rect = session.finish(translation, bounds, min_size);
                tracing::trace!(rect = ?self.rect, "crop drag finished");
                Some(self.rect)
            }
        }
    }

    /// Accumulated rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotates the output a further 90° clockwise.
    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    /// Rotates the output a further 90° counter-clockwise.
    pub fn rotate_counter_clockwise(&mut self) {
        self.rotation = self.rotation.counter_clockwise();
    }

    /// Current image generation.
    ///
    /// Bumped whenever the image or its layout changes.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if a result for `request` still applies to this editor.
    #[must_use]
    pub fn accepts(&self, request: &CropRequest) -> bool {
        request.generation == self.generation
    }

    /// Builds the request for the current selection of `image`.
    ///
    /// The output format is inferred from `image`.
    pub fn commit(&self, image: &str) -> Result<CropRequest, GeometryError> {
        let bounds = self.bounds.ok_or(GeometryError::Unmeasured)?;
        let mut rect = self.rect;
        if !bounds.is_degenerate() && !rect.fits_within(bounds.display, self.config.min_size) {
            debug_assert!(false, "crop rectangle escaped the image: {rect:?}");
            tracing::warn!(?rect, "re-clamping out-of-bounds crop rectangle");
            rect = clamp_into(rect, bounds, self.config.min_size);
        }
        let region = to_source(rect, bounds)?;
        let request = CropRequest {
            region,
            rotation: self.rotation,
            format: OutputFormat::infer(image),
            generation: self.generation,
        };
        tracing::debug!(?request, "crop committed");
        Ok(request)
    }

    /// Commits the selection and runs it through `transformer`.
    ///
    /// On failure the selection and rotation are left as they were so the
    /// same commit can be retried.
    pub fn apply<T: ImageTransformer>(
        &self,
        transformer: &mut T,
        image: &str,
    ) -> Result<alloc::string::String, CropError<T::Error>> {
        let request = self.commit(image)?;
        transformer.transform(image, &request).map_err(|err| {
            tracing::warn!(generation = request.generation, "image transform failed");
            CropError::Transform(err)
        })
    }
}

impl Default for CropEditor {
    fn default() -> Self {
        Self::new(CropConfig::default())
    }
}
