// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: turn raw pointer positions into cumulative [`GestureEvent`]s.
//!
//! ## Usage
//!
//! 1) Call [`DragState::begin`] with the down position.
//! 2) On each move event, call [`DragState::update`]; the returned event carries
//!    the total translation since the press.
//! 3) Finish with [`DragState::end`] on release or [`DragState::cancel`] when the
//!    platform terminates the gesture. Both reset the state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//! use understory_event_state::gesture::GestureEvent;
//!
//! let mut drag = DragState::default();
//! drag.begin(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let end = drag.end(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(end, GestureEvent::End { translation: Vec2::new(5.0, 5.0) });
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::gesture::GestureEvent;

/// Tracks a single-pointer drag between press and release.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Press position of the active drag.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag from `pos`, replacing any drag in progress.
    pub fn begin(&mut self, pos: Point) -> GestureEvent {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        GestureEvent::Begin { position: pos }
    }

    /// Record a move to `pos`.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<GestureEvent> {
        let translation = self.total_offset(pos)?;
        self.last_pos = Some(pos);
        Some(GestureEvent::Update { translation })
    }

    /// Finish the drag with a release at `pos`.
    pub fn end(&mut self, pos: Point) -> Option<GestureEvent> {
        let translation = self.total_offset(pos)?;
        self.reset();
        Some(GestureEvent::End { translation })
    }

    /// Terminate the drag without a release position.
    ///
    /// The last recorded position is used for the final translation.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let translation = self.total_offset(self.last_pos?)?;
        self.reset();
        Some(GestureEvent::Cancel { translation })
    }

    /// Get total offset from the press position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns `true` while a drag operation is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    fn reset(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn begin_reports_position() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        let ev = drag.begin(start);

        assert_eq!(ev, GestureEvent::Begin { position: start });
        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
    }

    #[test]
    fn updates_are_cumulative_from_press() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0.0, 0.0));

        let first = drag.update(Point::new(5.0, 3.0));
        assert_eq!(
            first,
            Some(GestureEvent::Update {
                translation: Vec2::new(5.0, 3.0)
            })
        );

        let second = drag.update(Point::new(8.0, 7.0));
        assert_eq!(
            second,
            Some(GestureEvent::Update {
                translation: Vec2::new(8.0, 7.0)
            })
        );
        assert_eq!(drag.last_pos, Some(Point::new(8.0, 7.0)));
    }

    #[test]
    fn update_without_drag_is_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn end_resets_and_reports_final_translation() {
        let mut drag = DragState::default();
        drag.begin(Point::new(100.0, 100.0));
        drag.update(Point::new(120.0, 90.0));

        let ev = drag.end(Point::new(90.0, 85.0));

        assert_eq!(
            ev,
            Some(GestureEvent::End {
                translation: Vec2::new(-10.0, -15.0)
            })
        );
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(Point::ZERO), None);
    }

    #[test]
    fn cancel_uses_last_position() {
        let mut drag = DragState::default();
        drag.begin(Point::new(1.0, 1.0));
        drag.update(Point::new(4.0, 5.0));

        let ev = drag.cancel();

        assert_eq!(
            ev,
            Some(GestureEvent::Cancel {
                translation: Vec2::new(3.0, 4.0)
            })
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_on_fresh_state_is_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.cancel(), None);
    }

    #[test]
    fn begin_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));

        drag.begin(Point::new(50.0, 60.0));

        assert_eq!(drag.total_offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn fractional_coordinates() {
        let mut drag = DragState::default();
        drag.begin(Point::new(1.5, 2.7));

        let total = drag.total_offset(Point::new(3.2, 4.1)).unwrap();

        assert!((total.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((total.y - 1.4).abs() < f64::EPSILON * 10.0);
    }
}
