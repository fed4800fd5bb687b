// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which gesture the viewer is currently tracking.
///
/// Every gesture returns to [`GesturePhase::Idle`] on release or cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down and no recognizer has claimed it yet; releasing
    /// quickly without moving is a tap.
    Tapping,
    /// A pinch owns the gesture.
    Pinching,
    /// A pan owns the gesture.
    Panning,
}

/// Recognizers racing for a viewer gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Recognizer {
    Pinch,
    Pan,
    Tap,
}
