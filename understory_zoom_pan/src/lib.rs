// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_pan --heading-base-level=0

//! Understory Zoom Pan: bounded pinch-zoom and pan for image viewers.
//!
//! [`ZoomPanController`] tracks a scale and a translation for content shown in
//! a fixed-size viewer and keeps both inside hard limits while the user
//! pinches, pans or taps:
//! - Scale is clamped to [`ZoomLimits`] (`1..=4` by default).
//! - Translation is clamped per axis to `±(scale − 1) · size / 2`
//!   ([`translation_bounds`]), so the content always covers the viewer.
//! - At or below scale `1` panning is disabled.
//! - Pinch, pan and tap race for each gesture; the first recognizer to claim
//!   it owns it until release.
//!
//! Updates are always applied to the values committed when the gesture began
//! (`base_scale`, `base_translation`), never to the previous frame.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom_pan::{ViewerInput, ViewerResponse, ZoomPanController};
//!
//! let mut viewer = ZoomPanController::new(Size::new(400.0, 400.0));
//!
//! viewer.handle(ViewerInput::Down { position: Point::new(200.0, 200.0), time_ms: 0 });
//! viewer.handle(ViewerInput::Pinch { factor: 5.0, focal: None });
//! let done = viewer.handle(ViewerInput::Up { position: Point::new(200.0, 200.0), time_ms: 400 });
//! let ViewerResponse::Finalized(state) = done else { unreachable!() };
//! assert_eq!(state.scale, 4.0);
//!
//! // Panning is bounded by the scaled overhang: (4 - 1) * 400 / 2.
//! viewer.handle(ViewerInput::Down { position: Point::new(200.0, 200.0), time_ms: 1_000 });
//! viewer.handle(ViewerInput::Pan { translation: Vec2::new(1_000.0, 0.0) });
//! assert_eq!(viewer.translation(), Vec2::new(600.0, 0.0));
//! ```
//!
//! ## Taps
//!
//! A press released within the tap thresholds of
//! [`TapConfig`](understory_event_state::tap::TapConfig) while no other
//! recognizer has claimed the gesture yields [`ViewerResponse::Dismiss`].
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod phase;
mod state;

pub use controller::{ViewerInput, ViewerResponse, ZoomPanController};
pub use phase::GesturePhase;
pub use state::{ZoomLimits, ZoomState, clamp_translation, translation_bounds};
