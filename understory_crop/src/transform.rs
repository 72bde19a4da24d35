// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale plus top-left offset of an image inside a viewport.
///
/// `scale` is relative to the image's raw pixel extent and `offset` is the
/// position of the scaled image's top-left corner in viewport coordinates.
///
/// No validation happens here: gestures may legally push the transform past
/// its resting bounds while they are active, and the settle animation brings
/// it back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor applied to the image extent.
    pub scale: f64,
    /// Top-left corner of the scaled image, in viewport coordinates.
    pub offset: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Unit scale with the image's top-left corner at the viewport origin.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from a scale and offset.
    #[must_use]
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Places `extent` so that its smaller-ratio side exactly fills the matching
    /// side of `viewport`, centring the overflow on the other axis.
    ///
    /// - Landscape or square images (`width / height >= 1`) are scaled to the
    ///   viewport height and centred horizontally.
    /// - Portrait images are scaled to the viewport width and centred
    ///   vertically.
    ///
    /// Degenerate extents or viewports yield [`Transform::IDENTITY`].
    #[must_use]
    pub fn center_fit(extent: Size, viewport: Size) -> Self {
        if !is_positive(extent) || !is_positive(viewport) {
            return Self::IDENTITY;
        }
        let ratio = extent.width / extent.height;
        if ratio >= 1.0 {
            let scale = viewport.height / extent.height;
            let expansion = (extent.width * scale - viewport.width) / 2.0;
            Self::new(scale, Vec2::new(-expansion, 0.0))
        } else {
            let scale = viewport.width / extent.width;
            let expansion = (extent.height * scale - viewport.height) / 2.0;
            Self::new(scale, Vec2::new(0.0, -expansion))
        }
    }

    /// Moves the image by `delta` in viewport space.
    pub fn translate(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Replaces scale and offset together.
    pub fn rescale(&mut self, scale: f64, offset: Vec2) {
        self.scale = scale;
        self.offset = offset;
    }

    /// Returns the rectangle the image covers in viewport space.
    ///
    /// This is always derived from the current scale and offset, never cached.
    #[must_use]
    pub fn display_rect(&self, extent: Size) -> Rect {
        let origin = self.offset.to_point();
        Rect::from_origin_size(origin, extent * self.scale)
    }

    /// Returns the affine map from image pixel space into viewport space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Maps a viewport point into image pixel coordinates.
    ///
    /// Returns `None` when the scale is not invertible.
    #[must_use]
    pub fn viewport_to_image_point(&self, pt: Point) -> Option<Point> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return None;
        }
        Some(self.to_affine().inverse() * pt)
    }
}

pub(crate) fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
