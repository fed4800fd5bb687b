// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer contract consumed by gesture-driven editors.
//!
//! A gesture is one continuous pointer interaction: a [`GestureEvent::Begin`]
//! carrying the down position, any number of [`GestureEvent::Update`]s, and a
//! terminal [`GestureEvent::End`] or [`GestureEvent::Cancel`]. Every
//! translation is cumulative since `Begin`.

use kurbo::{Point, Vec2};

/// One event of a single-pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The pointer went down at `position` (container coordinates).
    Begin {
        /// Down position.
        position: Point,
    },
    /// The pointer moved; `translation` is the total offset since `Begin`.
    Update {
        /// Cumulative translation.
        translation: Vec2,
    },
    /// The pointer was released.
    End {
        /// Final cumulative translation.
        translation: Vec2,
    },
    /// The gesture was terminated by the platform (interrupted, stolen, ...).
    Cancel {
        /// Last known cumulative translation.
        translation: Vec2,
    },
}

impl GestureEvent {
    /// Returns the cumulative translation carried by this event.
    ///
    /// `Begin` carries no movement and reports [`Vec2::ZERO`].
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        match *self {
            Self::Begin { .. } => Vec2::ZERO,
            Self::Update { translation }
            | Self::End { translation }
            | Self::Cancel { translation } => translation,
        }
    }

    /// Returns `true` for `End` and `Cancel`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::End { .. } | Self::Cancel { .. })
    }
}
