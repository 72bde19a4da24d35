// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Ratio by which `scale` lies outside `[min_scale, max_scale]`.
///
/// Returns `scale / min_scale` below the range, `scale / max_scale` above it,
/// and exactly `1.0` inside it. Dividing the scale by this ratio yields the
/// nearest bound.
#[must_use]
pub fn overscale_ratio(scale: f64, min_scale: f64, max_scale: f64) -> f64 {
    if scale < min_scale {
        scale / min_scale
    } else if scale > max_scale {
        scale / max_scale
    } else {
        1.0
    }
}
