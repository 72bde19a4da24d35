// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band damping for drag and pinch input.
//!
//! Raw gesture deltas pass through these functions before they reach the
//! transform, so the image feels increasingly stiff the further it is pushed
//! past its bounds.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Attenuates a drag `delta` by how far the axis is already over-scrolled.
///
/// The delta is reduced by `sqrt(|overscroll| / extent)` of itself, where
/// `extent` is the viewport size on the same axis. The reduction saturates so
/// a drag is never reversed. A zero overscroll passes the delta through, as
/// does a non-positive `extent`.
#[must_use]
pub fn damp_drag(delta: f64, overscroll: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 {
        return delta;
    }
    let off_ratio = overscroll.abs() / extent;
    let resistance = off_ratio.sqrt().min(1.0);
    delta - delta * resistance
}

/// Attenuates a pinch `factor` by how deep the scale is past its bounds.
///
/// `overscale_ratio` is the output of [`overscale_ratio`](crate::overscale_ratio).
/// At `1.0` the factor passes through. Otherwise the ratio is folded to be at
/// most `1.0` and mapped to `t = (ratio - max_over_scale) / (1 - max_over_scale)`
/// (floored at `0`); the result `factor * (t + (1 - t) / factor)` moves from
/// `factor` at `t = 1` to `1.0` (no further zoom) at `t = 0`.
#[must_use]
pub fn damp_scale(factor: f64, overscale_ratio: f64, max_over_scale: f64) -> f64 {
    if overscale_ratio == 1.0 {
        return factor;
    }
    if !(factor > 0.0 && factor.is_finite() && overscale_ratio > 0.0) {
        return factor;
    }
    let folded = if overscale_ratio > 1.0 {
        1.0 / overscale_ratio
    } else {
        overscale_ratio
    };
    let t = ((folded - max_over_scale) / (1.0 - max_over_scale)).max(0.0);
    factor * (t + (1.0 - t) / factor)
}
