// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture race: the first recognizer to claim a gesture owns it.
//!
//! Several recognizers (pinch, pan, tap, ...) observe the same pointer stream.
//! [`GestureRace`] records which one claimed the gesture first; later claims by
//! other recognizers lose until the race is [reset](GestureRace::reset) at the
//! end of the gesture. The recognizer kind is any small copyable type.
//!
//! ```
//! use understory_event_state::race::{Claim, GestureRace};
//!
//! let mut race = GestureRace::new();
//! assert_eq!(race.claim("pinch"), Claim::Won);
//! assert_eq!(race.claim("pinch"), Claim::AlreadyOwned);
//! assert_eq!(race.claim("pan"), Claim::Lost);
//! race.reset();
//! assert_eq!(race.winner(), None);
//! ```

/// Result of [`GestureRace::claim`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Claim {
    /// The claimant is the first to recognize the gesture.
    Won,
    /// The claimant already owns the gesture.
    AlreadyOwned,
    /// Another recognizer owns the gesture.
    Lost,
}

impl Claim {
    /// Returns `true` if the claimant owns the gesture after the claim.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Self::Won | Self::AlreadyOwned)
    }
}

/// Tracks the owner of the current gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureRace<K> {
    winner: Option<K>,
}

impl<K> Default for GestureRace<K> {
    fn default() -> Self {
        Self { winner: None }
    }
}

impl<K: Copy + PartialEq> GestureRace<K> {
    /// Create an unclaimed race.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to claim the gesture for `kind`.
    pub fn claim(&mut self, kind: K) -> Claim {
        match self.winner {
            None => {
                self.winner = Some(kind);
                Claim::Won
            }
            Some(owner) if owner == kind => Claim::AlreadyOwned,
            Some(_) => Claim::Lost,
        }
    }

    /// Returns the current owner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<K> {
        self.winner
    }

    /// Returns `true` if `kind` may still act on the gesture.
    #[must_use]
    pub fn is_open_to(&self, kind: K) -> bool {
        self.winner.is_none_or(|owner| owner == kind)
    }

    /// Clear the owner at the end of a gesture.
    pub fn reset(&mut self) {
        self.winner = None;
    }
}
