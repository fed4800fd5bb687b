// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam to the external image transform.
//!
//! Pixel work (decode, crop, rotate, encode) is not done here. A committed crop
//! becomes a [`CropRequest`] that an [`ImageTransformer`] implementation turns
//! into a new image resource. The region is always expressed in the
//! *unrotated* source image; implementations crop first and rotate second.

use alloc::string::String;

use crate::rect::SourceRect;

/// Clockwise rotation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// 90° clockwise.
    Deg90,
    /// 180°.
    Deg180,
    /// 270° clockwise (90° counter-clockwise).
    Deg270,
}

impl Rotation {
    /// Normalizes an arbitrary angle to the nearest quarter turn.
    ///
    /// Halfway angles round up (`45` becomes `90`), negative angles wrap
    /// (`-90` becomes `270`).
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        let quarter_turns = (i64::from(degrees) + 45).div_euclid(90);
        Self::from_quarter_turns(quarter_turns)
    }

    fn from_quarter_turns(turns: i64) -> Self {
        match turns.rem_euclid(4) {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Number of clockwise quarter turns, `0..4`.
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Angle in degrees, one of `0`, `90`, `180` or `270`.
    #[must_use]
    pub fn degrees(self) -> u16 {
        u16::from(self.quarter_turns()) * 90
    }

    /// Rotates a further 90° clockwise.
    #[must_use]
    pub fn clockwise(self) -> Self {
        Self::from_quarter_turns(i64::from(self.quarter_turns()) + 1)
    }

    /// Rotates a further 90° counter-clockwise.
    #[must_use]
    pub fn counter_clockwise(self) -> Self {
        Self::from_quarter_turns(i64::from(self.quarter_turns()) - 1)
    }

    /// Returns `true` when output width and height are swapped.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

/// Encoding requested from the transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// JPEG; used whenever the input format is unknown or unsupported.
    #[default]
    Jpeg,
    /// PNG.
    Png,
}

impl OutputFormat {
    /// Infers the output format from an image path or URI.
    ///
    /// Only the extension of the last path segment is considered, ignoring
    /// any query string or fragment. Anything other than PNG falls back to
    /// JPEG.
    ///
    /// ```
    /// use understory_crop::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::infer("file:///tmp/scan.PNG"), OutputFormat::Png);
    /// assert_eq!(OutputFormat::infer("https://cdn.example/a.png?w=200"), OutputFormat::Png);
    /// assert_eq!(OutputFormat::infer("photo.heic"), OutputFormat::Jpeg);
    /// ```
    #[must_use]
    pub fn infer(reference: &str) -> Self {
        let path = reference
            .split(['?', '#'])
            .next()
            .unwrap_or(reference);
        let name = path.rsplit('/').next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Jpeg,
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// MIME type.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Everything the external transform needs to produce the cropped image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CropRequest {
    /// Region to keep, in unrotated source pixels.
    pub region: SourceRect,
    /// Rotation applied after cropping.
    pub rotation: Rotation,
    /// Encoding of the result.
    pub format: OutputFormat,
    /// Image generation the request was made against.
    ///
    /// Results for an older generation must be discarded; see
    /// [`CropEditor::accepts`](crate::CropEditor::accepts).
    pub generation: u64,
}

/// External crop/rotate service.
///
/// Implementations receive the original image reference and return a
/// reference to the new image. Failures are reported to the user as
/// retryable; the editor's selection is left untouched.
pub trait ImageTransformer {
    /// Transport or processing error.
    type Error;

    /// Crops and rotates `image` as described by `request`.
    fn transform(&mut self, image: &str, request: &CropRequest) -> Result<String, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_normalization() {
        assert_eq!(Rotation::from_degrees(0), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(44), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(45), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(-90), Rotation::Deg270);
        assert_eq!(Rotation::from_degrees(450), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(-720), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(i32::MAX), Rotation::from_degrees(i32::MAX % 360));
    }

    #[test]
    fn rotation_steps_wrap() {
        let mut r = Rotation::Deg0;
        for expected in [90, 180, 270, 0] {
            r = r.clockwise();
            assert_eq!(r.degrees(), expected);
        }
        assert_eq!(Rotation::Deg0.counter_clockwise(), Rotation::Deg270);
        assert!(Rotation::Deg90.swaps_axes());
        assert!(!Rotation::Deg180.swaps_axes());
    }

    #[test]
    fn format_inference() {
        assert_eq!(OutputFormat::infer("/data/photo.jpg"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::infer("/data/photo.jpeg"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::infer("/data/photo.png"), OutputFormat::Png);
        assert_eq!(OutputFormat::infer("content://media/123"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::infer("/dir.png/file"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::infer(".png"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::infer("img.png#frag"), OutputFormat::Png);
        assert_eq!(OutputFormat::infer(""), OutputFormat::Jpeg);
    }

    #[test]
    fn format_metadata() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
    }
}
