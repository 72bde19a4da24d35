// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Over-scroll measurement: how far the image sits from its resting position.
//!
//! Both drag resistance and the settle animation read these values, so they
//! are the single definition of "out of bounds" for the crate.

use kurbo::{Rect, Size, Vec2};

/// Signed over-scroll of `rect` along X relative to a viewport of `viewport`.
///
/// See [`overscroll`] for the rules.
#[must_use]
pub fn overscroll_x(rect: Rect, viewport: Size) -> f64 {
    axis_overscroll(rect.x0, rect.x1, viewport.width)
}

/// Signed over-scroll of `rect` along Y relative to a viewport of `viewport`.
///
/// See [`overscroll`] for the rules.
#[must_use]
pub fn overscroll_y(rect: Rect, viewport: Size) -> f64 {
    axis_overscroll(rect.y0, rect.y1, viewport.height)
}

/// Per-axis distance between the displayed image and its resting position.
///
/// Each axis is measured independently, first match wins:
/// 1. The image is no larger than the viewport: distance from the image
///    centre to the viewport centre (positive when right/below).
/// 2. The image covers the viewport edge to edge: `0`.
/// 3. The near edge has moved inside the viewport: the (positive) gap.
/// 4. Otherwise the far edge has moved inside: the (negative) gap.
///
/// Subtracting the result from the offset moves the image back to rest.
#[must_use]
pub fn overscroll(rect: Rect, viewport: Size) -> Vec2 {
    Vec2::new(overscroll_x(rect, viewport), overscroll_y(rect, viewport))
}

fn axis_overscroll(near: f64, far: f64, view_extent: f64) -> f64 {
    if far - near <= view_extent {
        return (near + far) / 2.0 - view_extent / 2.0;
    }
    if near <= 0.0 && far >= view_extent {
        return 0.0;
    }
    if near > 0.0 {
        return near;
    }
    far - view_extent
}
