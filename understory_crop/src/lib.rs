// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop --heading-base-level=0

//! Understory Crop: headless crop-rectangle editing.
//!
//! This crate models the geometry behind an interactive crop overlay: a
//! rectangle the user resizes and moves over a displayed image, constrained to
//! a minimum size and to the image bounds, and finally mapped from display
//! space to the source image's pixels. It focuses on:
//! - Classifying a pointer-down into one of nine [`Zone`]s ([`classify`]).
//! - Solving the rectangle for a drag from the rectangle at gesture start and
//!   the cumulative pointer delta ([`resolve`]).
//! - Mapping display-space rectangles to source pixels ([`to_source`]) and back
//!   ([`to_display`]).
//! - Packaging a commit for an external image transform ([`CropRequest`],
//!   [`ImageTransformer`]).
//!
//! It does **not** decode, crop or encode pixels, and it owns no rendering or
//! input backend. Callers are expected to:
//! - Measure the displayed image and its natural size ([`ImageBounds`]).
//! - Translate platform pointer events into
//!   [`GestureEvent`](understory_event_state::gesture::GestureEvent)s, for
//!   example with
//!   [`DragState`](understory_event_state::drag::DragState).
//! - Draw the rectangle returned after each event.
//!
//! ## Pure pipeline
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_crop::{CropRect, GestureSession, ImageBounds, SourceRect, to_source};
//!
//! let bounds = ImageBounds::new(Size::new(300.0, 300.0), Size::new(1200.0, 1200.0));
//! let min = Size::new(60.0, 60.0);
//! let rect = CropRect::new(10.0, 10.0, 100.0, 100.0);
//!
//! // Press on the top-left corner; the zone is fixed for the whole drag.
//! let mut session = GestureSession::begin(Point::new(15.0, 15.0), rect, Vec2::ZERO).unwrap();
//! session.update(Vec2::new(-5.0, -5.0), bounds, min);
//! let done = session.finish(Vec2::new(-20.0, -20.0), bounds, min);
//! assert_eq!(done, CropRect::new(0.0, 0.0, 120.0, 120.0));
//!
//! assert_eq!(to_source(done, bounds), Ok(SourceRect::new(0, 0, 480, 480)));
//! ```
//!
//! ## Editor
//!
//! [`CropEditor`] wraps the pipeline for hosts: it keeps the committed
//! rectangle, the active session and the accumulated [`Rotation`], and turns
//! the selection into a [`CropRequest`].
//!
//! ## Design notes
//!
//! - Every move event re-solves from the rectangle at gesture start; results
//!   are never accumulated frame over frame.
//! - Out-of-range drags are pinned, never rejected: the rectangle always stays
//!   inside the image and at least as large as the minimum.
//! - Degenerate geometry (an image measured before layout completes) is
//!   absorbed: the solver returns its input unchanged and the mapper returns
//!   [`GeometryError`] instead of producing infinities.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod commit;
mod editor;
mod error;
mod hit;
mod mapper;
mod rect;
mod session;
mod solver;
mod zone;

pub use commit::{CropRequest, ImageTransformer, OutputFormat, Rotation};
pub use editor::{CropConfig, CropEditor};
pub use error::{CropError, GeometryError};
pub use hit::classify;
pub use mapper::{to_display, to_source};
pub use rect::{CropRect, ImageBounds, SourceRect};
pub use session::GestureSession;
pub use solver::{clamp_into, resolve};
pub use zone::{AxisHandle, Zone};
