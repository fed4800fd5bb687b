// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use understory_event_state::race::{Claim, GestureRace};
use understory_event_state::tap::{TapConfig, TapResult, TapState};

use crate::phase::{GesturePhase, Recognizer};
use crate::state::{ZoomLimits, ZoomState, clamp_translation};

/// Input to [`ZoomPanController::handle`].
///
/// Pinch factors and pan translations are cumulative since the recognizer
/// started reporting them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerInput {
    /// First pointer down.
    Down {
        /// Position in view coordinates.
        position: Point,
        /// Timestamp in milliseconds.
        time_ms: u64,
    },
    /// Pointer movement that no recognizer has interpreted yet.
    Move {
        /// Position in view coordinates.
        position: Point,
    },
    /// Pinch recognizer update.
    Pinch {
        /// Finger distance relative to the start of the pinch.
        factor: f64,
        /// Midpoint between the fingers in content-box coordinates, if known.
        focal: Option<Point>,
    },
    /// Pan recognizer update.
    Pan {
        /// Translation since the start of the pan.
        translation: Vec2,
    },
    /// Last pointer up.
    Up {
        /// Position in view coordinates.
        position: Point,
        /// Timestamp in milliseconds.
        time_ms: u64,
    },
    /// The platform terminated the gesture.
    Cancel,
}

/// What the host should do after [`ZoomPanController::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerResponse {
    /// Nothing changed.
    Ignored,
    /// Render the new state immediately.
    Updated(ZoomState),
    /// The gesture finished; these are the settled values. A presentation
    /// layer may ease towards them from the last rendered state.
    Finalized(ZoomState),
    /// A tap was recognized; close the viewer.
    Dismiss,
}

/// Pinch/pan/tap controller for an image viewer.
///
/// `ZoomPanController` keeps the viewer's [`ZoomState`] within hard limits:
/// - `scale` never leaves [`ZoomLimits`] (by default `1..=4`).
/// - Each translation axis stays within `±(scale − 1) · content / 2`, so the
///   scaled content always covers the viewer.
/// - Below or at scale `1`, panning is disabled and translation is zero.
///
/// Gestures race: the first of pinch, pan or tap to recognize its pattern owns
/// the gesture, and the others are ignored until release. Ending or cancelling
/// a gesture applies the same clamping and commits the base values.
///
/// The state resets to identity whenever the viewed image changes or the
/// viewer is shown or hidden.
#[derive(Clone, Debug)]
pub struct ZoomPanController {
    content: Size,
    limits: ZoomLimits,
    state: ZoomState,
    phase: GesturePhase,
    race: GestureRace<Recognizer>,
    tap: TapState,
    visible: bool,
}

impl ZoomPanController {
    /// Creates a controller for content of the given size with default limits.
    #[must_use]
    pub fn new(content: Size) -> Self {
        Self::with_config(content, ZoomLimits::default(), TapConfig::default())
    }

    /// Creates a controller with explicit limits and tap thresholds.
    #[must_use]
    pub fn with_config(content: Size, limits: ZoomLimits, tap: TapConfig) -> Self {
        let mut controller = Self {
            content,
            limits,
            state: ZoomState::IDENTITY,
            phase: GesturePhase::Idle,
            race: GestureRace::new(),
            tap: TapState::new(tap),
            visible: true,
        };
        controller.reset();
        controller
    }

    /// Returns the committed state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.state.translation
    }

    /// Gesture currently being tracked.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Scale limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Size of the content at scale `1`.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Updates the content size after a layout change and re-clamps.
    pub fn set_content_size(&mut self, content: Size) {
        if self.content == content {
            return;
        }
        self.content = content;
        self.settle();
    }

    /// Changes the scale limits and re-clamps.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.settle();
    }

    /// Returns the viewer to identity and abandons any gesture.
    pub fn reset(&mut self) {
        self.state = ZoomState::IDENTITY;
        self.state.scale = self.limits.clamp(1.0);
        self.state.commit_base();
        self.phase = GesturePhase::Idle;
        self.race.reset();
        self.tap.cancel();
        tracing::debug!("zoom state reset");
    }

    /// Notifies the controller that a different image is shown.
    pub fn image_changed(&mut self) {
        self.reset();
    }

    /// Notifies the controller that the viewer was shown or hidden.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.reset();
        }
    }

    /// Starts a pinch from the committed values.
    pub fn pinch_begin(&mut self) {
        self.state.commit_base();
        self.phase = GesturePhase::Pinching;
    }

    /// Applies a cumulative pinch `factor`.
    ///
    /// With a `focal` point (content-box coordinates) the content under it
    /// stays put as far as the translation bounds allow. Non-positive or
    /// non-finite factors are ignored.
    pub fn pinch_update(&mut self, factor: f64, focal: Option<Point>) -> ZoomState {
        if !(factor.is_finite() && factor > 0.0) {
            return self.state;
        }
        if self.phase != GesturePhase::Pinching {
            self.pinch_begin();
        }
        let base_scale = self.state.base_scale;
        let scale = self.limits.clamp(base_scale * factor);
        let mut translation = self.state.base_translation;
        if let Some(focal) = focal.filter(|p| p.is_finite()) {
            let anchor = focal.to_vec2() - self.content.to_vec2() * 0.5;
            translation = anchor - (anchor - translation) * (scale / base_scale);
        }
        self.state.scale = scale;
        self.state.translation = clamp_translation(translation, scale, self.content);
        self.state
    }

    /// Finishes a pinch and commits the settled values.
    pub fn pinch_end(&mut self) -> ZoomState {
        self.finish()
    }

    /// Starts a pan from the committed values.
    pub fn pan_begin(&mut self) {
        self.state.commit_base();
        self.phase = GesturePhase::Panning;
    }

    /// Applies a cumulative pan `translation`.
    ///
    /// At or below scale `1` the translation is forced to zero.
    pub fn pan_update(&mut self, translation: Vec2) -> ZoomState {
        if !translation.is_finite() {
            return self.state;
        }
        if self.phase != GesturePhase::Panning {
            self.pan_begin();
        }
        self.state.translation = if self.state.scale <= 1.0 {
            Vec2::ZERO
        } else {
            clamp_translation(
                self.state.base_translation + translation,
                self.state.scale,
                self.content,
            )
        };
        self.state
    }

    /// Finishes a pan and commits the settled values.
    pub fn pan_end(&mut self) -> ZoomState {
        self.finish()
    }

    /// Routes one input through the gesture race.
    pub fn handle(&mut self, input: ViewerInput) -> ViewerResponse {
        match input {
            ViewerInput::Down { position, time_ms } => {
                if self.phase != GesturePhase::Idle {
                    self.finish();
                }
                self.race.reset();
                self.tap.on_down(position, time_ms);
                self.phase = GesturePhase::Tapping;
                ViewerResponse::Ignored
            }
            ViewerInput::Move { position } => {
                self.tap.on_move(position);
                ViewerResponse::Ignored
            }
            ViewerInput::Pinch { factor, focal } => match self.claim(Recognizer::Pinch) {
                Claim::Won => {
                    self.pinch_begin();
                    ViewerResponse::Updated(self.pinch_update(factor, focal))
                }
                Claim::AlreadyOwned => ViewerResponse::Updated(self.pinch_update(factor, focal)),
                Claim::Lost => ViewerResponse::Ignored,
            },
            ViewerInput::Pan { translation } => match self.claim(Recognizer::Pan) {
                Claim::Won => {
                    self.pan_begin();
                    ViewerResponse::Updated(self.pan_update(translation))
                }
                Claim::AlreadyOwned => ViewerResponse::Updated(self.pan_update(translation)),
                Claim::Lost => ViewerResponse::Ignored,
            },
            ViewerInput::Up { position, time_ms } => {
                let response = match self.race.winner() {
                    Some(Recognizer::Pinch | Recognizer::Pan) => {
                        ViewerResponse::Finalized(self.finish())
                    }
                    Some(Recognizer::Tap) => ViewerResponse::Ignored,
                    None => {
                        let tapped = self.tap.on_up(position, time_ms) == TapResult::Tap;
                        if tapped && self.claim(Recognizer::Tap).is_won() {
                            tracing::trace!("viewer tap recognized");
                            ViewerResponse::Dismiss
                        } else {
                            ViewerResponse::Ignored
                        }
                    }
                };
                self.end_gesture();
                response
            }
            ViewerInput::Cancel => {
                let response = match self.phase {
                    GesturePhase::Pinching | GesturePhase::Panning => {
                        ViewerResponse::Finalized(self.finish())
                    }
                    GesturePhase::Idle | GesturePhase::Tapping => ViewerResponse::Ignored,
                };
                self.end_gesture();
                response
            }
        }
    }

    fn claim(&mut self, recognizer: Recognizer) -> Claim {
        let claim = self.race.claim(recognizer);
        if claim == Claim::Won {
            tracing::trace!(?recognizer, "viewer gesture claimed");
            if recognizer != Recognizer::Tap {
                self.tap.cancel();
            }
        }
        claim
    }

    fn end_gesture(&mut self) {
        self.race.reset();
        self.tap.cancel();
        self.phase = GesturePhase::Idle;
    }

    /// Terminal transition shared by release and cancel.
    fn finish(&mut self) -> ZoomState {
        self.settle();
        self.phase = GesturePhase::Idle;
        self.state
    }

    fn settle(&mut self) {
        let scale = self.limits.clamp(self.state.scale);
        self.state.scale = scale;
        self.state.translation = if scale <= 1.0 {
            Vec2::ZERO
        } else {
            clamp_translation(self.state.translation, scale, self.content)
        };
        self.state.commit_base();
    }
}
