// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: pointer-stream state managers for gesture-driven editors.
//!
//! This crate provides small, focused state machines that turn a raw pointer
//! stream into the higher-level signals consumed by the crop editor and the
//! zoom/pan viewer:
//!
//! - [`gesture`]: The crop pointer contract ([`gesture::GestureEvent`]): begin,
//!   cumulative update, end and cancel.
//! - [`drag`]: Track a drag from raw positions and emit cumulative translations.
//! - [`tap`]: Recognize short, stationary presses with a duration threshold.
//! - [`race`]: Decide which of several competing recognizers owns a gesture.
//!
//! ## Design Philosophy
//!
//! Each state manager is:
//!
//! - **Minimal and focused**: one interaction pattern per module.
//! - **Transport agnostic**: touch, mouse and stylus all reduce to positions,
//!   translations and millisecond timestamps.
//! - **Cumulative, not incremental**: translations are always reported relative
//!   to the gesture start so consumers re-derive state from a known-good
//!   snapshot instead of accumulating per-frame error.
//!
//! ## Drag to gesture events
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//! use understory_event_state::gesture::GestureEvent;
//!
//! let mut drag = DragState::default();
//!
//! assert_eq!(
//!     drag.begin(Point::new(10.0, 10.0)),
//!     GestureEvent::Begin { position: Point::new(10.0, 10.0) }
//! );
//! drag.update(Point::new(15.0, 12.0));
//!
//! // Translation is measured from the press, not from the previous move.
//! let event = drag.update(Point::new(20.0, 20.0));
//! assert_eq!(event, Some(GestureEvent::Update { translation: Vec2::new(10.0, 10.0) }));
//! ```
//!
//! ## Tap recognition inside a race
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::race::GestureRace;
//! use understory_event_state::tap::{TapConfig, TapResult, TapState};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Kind { Pan, Tap }
//!
//! let mut race = GestureRace::new();
//! let mut tap = TapState::new(TapConfig::default());
//!
//! tap.on_down(Point::new(5.0, 5.0), 1_000);
//! let result = tap.on_up(Point::new(6.0, 5.0), 1_100);
//! assert_eq!(result, TapResult::Tap);
//! assert!(race.claim(Kind::Tap).is_won());
//! assert!(!race.claim(Kind::Pan).is_won());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod gesture;
pub mod race;
pub mod tap;
