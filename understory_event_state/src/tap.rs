// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition with spatial and temporal tolerance.
//!
//! A tap is a press followed by a release that happens in less than
//! [`TapConfig::max_duration_ms`] and never strays more than [`TapConfig::slop`]
//! pixels from the press position. Timestamps are caller-supplied milliseconds
//! from any monotonic clock.
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::tap::{TapConfig, TapResult, TapState};
//!
//! let mut tap = TapState::new(TapConfig::default());
//! tap.on_down(Point::new(10.0, 10.0), 0);
//! assert_eq!(tap.on_up(Point::new(10.0, 10.0), 900), TapResult::TooLong);
//! ```

use kurbo::Point;

/// Thresholds for [`TapState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// Press duration, in milliseconds, at which a press stops being a tap.
    pub max_duration_ms: u64,
    /// Largest distance, in pixels, the pointer may travel from the press.
    pub slop: f64,
}

impl TapConfig {
    /// Default maximum press duration.
    pub const DEFAULT_MAX_DURATION_MS: u64 = 250;
    /// Default movement tolerance.
    pub const DEFAULT_SLOP: f64 = 10.0;
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_duration_ms: Self::DEFAULT_MAX_DURATION_MS,
            slop: Self::DEFAULT_SLOP,
        }
    }
}

/// Outcome of a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// The press qualifies as a tap.
    Tap,
    /// The press lasted longer than the configured threshold.
    TooLong,
    /// The pointer moved beyond the slop at some point during the press.
    Moved,
    /// No press was being tracked.
    NoPress,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    pos: Point,
    time_ms: u64,
    moved: bool,
}

/// Tracks one press and classifies its release.
#[derive(Clone, Copy, Debug)]
pub struct TapState {
    config: TapConfig,
    press: Option<Press>,
}

impl Default for TapState {
    fn default() -> Self {
        Self::new(TapConfig::default())
    }
}

impl TapState {
    /// Create a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// Returns the active thresholds.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Record a press, replacing any press in progress.
    pub fn on_down(&mut self, pos: Point, time_ms: u64) {
        self.press = Some(Press {
            pos,
            time_ms,
            moved: false,
        });
    }

    /// Record pointer movement during the press.
    ///
    /// Returns `true` while the press is still a tap candidate.
    pub fn on_move(&mut self, pos: Point) -> bool {
        let slop = self.config.slop;
        match self.press.as_mut() {
            Some(press) => {
                if !within_slop(press.pos, pos, slop) {
                    press.moved = true;
                }
                !press.moved
            }
            None => false,
        }
    }

    /// Classify the release at `pos` and clear the press.
    pub fn on_up(&mut self, pos: Point, time_ms: u64) -> TapResult {
        let Some(press) = self.press.take() else {
            return TapResult::NoPress;
        };
        if press.moved || !within_slop(press.pos, pos, self.config.slop) {
            return TapResult::Moved;
        }
        if time_ms.saturating_sub(press.time_ms) >= self.config.max_duration_ms {
            return TapResult::TooLong;
        }
        TapResult::Tap
    }

    /// Forget the current press.
    pub fn cancel(&mut self) {
        self.press = None;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

fn within_slop(a: Point, b: Point, slop: f64) -> bool {
    (b - a).hypot2() <= slop * slop
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_stationary_press_is_tap() {
        let mut tap = TapState::default();
        tap.on_down(Point::new(10.0, 20.0), 1_000);
        assert_eq!(tap.on_up(Point::new(12.0, 21.0), 1_050), TapResult::Tap);
        assert!(!tap.is_pressed());
    }

    #[test]
    fn press_must_end_before_threshold() {
        let mut tap = TapState::default();
        tap.on_down(Point::ZERO, 0);
        assert_eq!(
            tap.on_up(Point::ZERO, TapConfig::DEFAULT_MAX_DURATION_MS - 1),
            TapResult::Tap
        );
        tap.on_down(Point::ZERO, 0);
        assert_eq!(
            tap.on_up(Point::ZERO, TapConfig::DEFAULT_MAX_DURATION_MS),
            TapResult::TooLong
        );
    }

    #[test]
    fn long_press_is_rejected() {
        let mut tap = TapState::default();
        tap.on_down(Point::ZERO, 0);
        assert_eq!(tap.on_up(Point::ZERO, 251), TapResult::TooLong);
    }

    #[test]
    fn movement_beyond_slop_disqualifies_even_if_pointer_returns() {
        let mut tap = TapState::default();
        tap.on_down(Point::new(0.0, 0.0), 0);
        assert!(tap.on_move(Point::new(3.0, 4.0)));
        assert!(!tap.on_move(Point::new(30.0, 0.0)));
        assert_eq!(tap.on_up(Point::new(0.0, 0.0), 10), TapResult::Moved);
    }

    #[test]
    fn release_far_away_is_moved() {
        let mut tap = TapState::new(TapConfig {
            max_duration_ms: 500,
            slop: 2.0,
        });
        tap.on_down(Point::ZERO, 0);
        assert_eq!(tap.on_up(Point::new(5.0, 0.0), 10), TapResult::Moved);
    }

    #[test]
    fn release_without_press() {
        let mut tap = TapState::default();
        assert_eq!(tap.on_up(Point::ZERO, 0), TapResult::NoPress);
        tap.on_down(Point::ZERO, 0);
        tap.cancel();
        assert_eq!(tap.on_up(Point::ZERO, 1), TapResult::NoPress);
    }

    #[test]
    fn clock_going_backwards_does_not_underflow() {
        let mut tap = TapState::default();
        tap.on_down(Point::ZERO, 1_000);
        assert_eq!(tap.on_up(Point::ZERO, 900), TapResult::Tap);
    }
}
