// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Geometry that cannot be mapped or committed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// No image has been measured yet.
    Unmeasured,
    /// The display or source size is empty or not finite, typically because
    /// layout has not completed.
    Degenerate {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// The rectangle contains a non-finite coordinate.
    NonFinite,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmeasured => f.write_str("no image has been measured"),
            Self::Degenerate { width, height } => {
                write!(f, "degenerate image size {width}x{height}")
            }
            Self::NonFinite => f.write_str("crop rectangle is not finite"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Failure to apply a crop.
///
/// Only [`CropError::Transform`] is meant for the user: the selection is left
/// untouched so the same commit can be retried.
#[derive(Clone, Debug, PartialEq)]
pub enum CropError<E> {
    /// The committed rectangle could not be mapped to source pixels.
    Geometry(GeometryError),
    /// The external image transform failed or timed out.
    Transform(E),
}

impl<E> From<GeometryError> for CropError<E> {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl<E: fmt::Display> fmt::Display for CropError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "cannot commit crop: {err}"),
            Self::Transform(err) => write!(f, "image transform failed: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for CropError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Transform(_) => None,
        }
    }
}
