// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::CropError;

/// Smallest scale the image settles back to after a gesture.
pub const MIN_SCALE: f64 = 0.2;

/// Largest scale the image settles back to after a gesture.
pub const MAX_SCALE: f64 = 3.0;

/// Normalized over-scale ratio below which pinch resistance fully engages.
///
/// A ratio of `1.0` means the scale is inside `[MIN_SCALE, MAX_SCALE]`. As the
/// ratio falls towards this value the pinch factor is pulled towards `1.0`.
pub const MAX_OVER_SCALE: f64 = 0.7;

/// Duration of the settle animation.
pub const SETTLE_DURATION: Duration = Duration::from_millis(400);

/// Shape of the decelerating settle curve; see [`crate::decelerate`].
pub const DECELERATE_FACTOR: f64 = 0.25;

/// Tunables for an [`ImageCropper`](crate::ImageCropper).
///
/// All fields are public; call [`CropConfig::validate`] (or construct the
/// cropper with [`ImageCropper::with_config`](crate::ImageCropper::with_config))
/// before relying on a hand-built value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropConfig {
    /// Lower scale bound the settle animation returns to.
    pub min_scale: f64,
    /// Upper scale bound the settle animation returns to.
    pub max_scale: f64,
    /// Over-scale ratio at which pinch resistance is total.
    pub max_over_scale: f64,
    /// How long a settle run takes.
    pub settle_duration: Duration,
    /// Shape of the decelerating settle curve.
    pub decelerate_factor: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            max_over_scale: MAX_OVER_SCALE,
            settle_duration: SETTLE_DURATION,
            decelerate_factor: DECELERATE_FACTOR,
        }
    }
}

impl CropConfig {
    /// Returns a copy with the given scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with the given settle duration.
    #[must_use]
    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration = duration;
        self
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// - [`CropError::InvalidScaleLimits`] unless `0 < min_scale <= max_scale`
    ///   and both are finite.
    /// - [`CropError::InvalidOverScale`] unless `0 < max_over_scale < 1`.
    /// - [`CropError::InvalidDecelerateFactor`] unless the factor is finite and
    ///   positive.
    pub fn validate(&self) -> Result<(), CropError> {
        let (min, max) = (self.min_scale, self.max_scale);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(CropError::InvalidScaleLimits { min, max });
        }
        if !(self.max_over_scale > 0.0 && self.max_over_scale < 1.0) {
            return Err(CropError::InvalidOverScale(self.max_over_scale));
        }
        if !(self.decelerate_factor.is_finite() && self.decelerate_factor > 0.0) {
            return Err(CropError::InvalidDecelerateFactor(self.decelerate_factor));
        }
        Ok(())
    }
}
