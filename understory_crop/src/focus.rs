// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::Transform;

/// Sets `transform.scale` to `new_scale` while keeping `focus` visually fixed.
///
/// The focus point's fractional position inside the display rectangle is
/// captured before the scale changes, then the offset is shifted so that the
/// same fractional position lands on `focus` again afterwards.
///
/// A non-positive or non-finite `new_scale` is ignored. When the current
/// display rectangle has no area the scale is applied without moving the
/// offset.
pub fn scale_keeping_focus(transform: &mut Transform, extent: Size, new_scale: f64, focus: Point) {
    if !(new_scale.is_finite() && new_scale > 0.0) {
        return;
    }
    let before = transform.display_rect(extent);
    if before.width() == 0.0 || before.height() == 0.0 {
        transform.scale = new_scale;
        return;
    }
    let ratio_x = (focus.x - before.x0) / before.width();
    let ratio_y = (focus.y - before.y0) / before.height();

    transform.scale = new_scale;

    let after = transform.display_rect(extent);
    let scaled_focus = Point::new(
        after.x0 + ratio_x * after.width(),
        after.y0 + ratio_y * after.height(),
    );
    transform.translate(focus - scaled_focus);
}

/// Fractional position of `pt` inside the display rectangle of `transform`.
///
/// `(0, 0)` is the image's top-left corner and `(1, 1)` its bottom-right.
/// Returns `None` for a rectangle without area.
#[must_use]
pub fn focus_ratio(transform: &Transform, extent: Size, pt: Point) -> Option<Vec2> {
    let rect = transform.display_rect(extent);
    if rect.width() == 0.0 || rect.height() == 0.0 {
        return None;
    }
    Some(Vec2::new(
        (pt.x - rect.x0) / rect.width(),
        (pt.y - rect.y0) / rect.height(),
    ))
}
