// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by fallible cropper setup calls.
///
/// Gesture and tick handlers never fail; they clamp degenerate numeric input
/// to a no-op instead. Only configuration, image loading, viewport sizing and
/// explicit animator transitions report errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropError {
    /// The bitmap extent is not finite and strictly positive.
    InvalidImageExtent {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
    /// The viewport size is not finite and non-negative.
    InvalidViewport {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
    /// Scale limits must satisfy `0 < min <= max` with finite values.
    InvalidScaleLimits {
        /// Rejected minimum scale.
        min: f64,
        /// Rejected maximum scale.
        max: f64,
    },
    /// The over-scale threshold must lie strictly between `0` and `1`.
    InvalidOverScale(f64),
    /// The settle curve factor must be finite and strictly positive.
    InvalidDecelerateFactor(f64),
    /// A settle run was started while another one is still running.
    AlreadySettling,
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImageExtent { width, height } => {
                write!(f, "invalid image extent {width}x{height}")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::InvalidScaleLimits { min, max } => {
                write!(f, "invalid scale limits [{min}, {max}]")
            }
            Self::InvalidOverScale(value) => {
                write!(f, "over-scale threshold {value} is outside (0, 1)")
            }
            Self::InvalidDecelerateFactor(value) => {
                write!(f, "decelerate factor {value} must be finite and positive")
            }
            Self::AlreadySettling => f.write_str("settle animation is already running"),
        }
    }
}

impl core::error::Error for CropError {}
