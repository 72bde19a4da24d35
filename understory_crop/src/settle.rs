// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle animation: the timed return of an out-of-bounds image to rest.
//!
//! ## Usage
//!
//! 1) On gesture release call [`SettleAnimator::start`].
//! 2) On each frame call [`SettleAnimator::advance`] with the frame time and
//!    feed the returned interpolant to [`settle_step`].
//! 3) Call [`SettleAnimator::cancel`] before applying new gesture input while
//!    a run is in progress.
//!
//! The animator itself never touches the transform; it only turns elapsed time
//! into an eased interpolant and tracks whether a run is active.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

use crate::{CropConfig, CropError, Transform, overscale_ratio, overscroll, scale_keeping_focus};

/// Whether a settle run is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettleState {
    /// No run is active; ticks are ignored.
    #[default]
    Idle,
    /// A run is active.
    Running {
        /// Time accumulated through [`SettleAnimator::advance`].
        elapsed: Duration,
    },
}

/// Explicit Idle/Running state machine driving a settle run.
#[derive(Clone, Copy, Debug)]
pub struct SettleAnimator {
    state: SettleState,
    duration: Duration,
    decelerate_factor: f64,
}

impl Default for SettleAnimator {
    fn default() -> Self {
        Self::from_config(&CropConfig::default())
    }
}

impl SettleAnimator {
    /// Creates an idle animator with the given duration and curve factor.
    #[must_use]
    pub fn new(duration: Duration, decelerate_factor: f64) -> Self {
        Self {
            state: SettleState::Idle,
            duration,
            decelerate_factor,
        }
    }

    /// Creates an idle animator using the settle settings of `config`.
    #[must_use]
    pub fn from_config(config: &CropConfig) -> Self {
        Self::new(config.settle_duration, config.decelerate_factor)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SettleState {
        self.state
    }

    /// Returns `true` while a run is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, SettleState::Running { .. })
    }

    /// Returns the configured run duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts a new run from zero elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::AlreadySettling`] if a run is active; call
    /// [`SettleAnimator::cancel`] first to restart.
    pub fn start(&mut self) -> Result<(), CropError> {
        if self.is_running() {
            return Err(CropError::AlreadySettling);
        }
        self.state = SettleState::Running {
            elapsed: Duration::ZERO,
        };
        Ok(())
    }

    /// Stops any active run. Returns `true` if a run was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = SettleState::Idle;
        was_running
    }

    /// Ends an active run without consuming more time.
    pub(crate) fn finish(&mut self) {
        self.state = SettleState::Idle;
    }

    /// Advances an active run by `dt` and returns the eased interpolant.
    ///
    /// The interpolant reaches exactly `1.0` on the call that crosses the
    /// duration, after which the animator is idle again. Returns `None` while
    /// idle.
    pub fn advance(&mut self, dt: Duration) -> Option<f64> {
        let SettleState::Running { elapsed } = self.state else {
            return None;
        };
        let elapsed = elapsed.saturating_add(dt);
        if elapsed >= self.duration {
            self.state = SettleState::Idle;
            return Some(1.0);
        }
        self.state = SettleState::Running { elapsed };
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        Some(decelerate(t, self.decelerate_factor))
    }
}

/// Decelerating easing curve on `[0, 1]`.
///
/// Computes `1 - (1 - t)^(2 * factor)`, or `1 - (1 - t)^2` when `factor` is
/// exactly `1`. Input is clamped to `[0, 1]`.
#[must_use]
pub fn decelerate(t: f64, factor: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if factor == 1.0 {
        let rest = 1.0 - t;
        1.0 - rest * rest
    } else {
        1.0 - (1.0 - t).powf(2.0 * factor)
    }
}

/// Applies one settle tick with interpolant `a` to `transform`.
///
/// Over-scroll and over-scale are measured against the transform as it is
/// now, so repeated ticks converge even though each one only removes a
/// fraction `a` of the remaining error:
/// - the offset moves back by `overscroll * a`,
/// - the scale blends towards its nearest bound by `a`, anchored at `focus`.
///
/// At `a = 1` all remaining over-scroll is removed and the scale lands on its
/// bound. A non-finite `a` leaves the transform untouched.
pub fn settle_step(
    transform: &mut Transform,
    extent: Size,
    viewport: Size,
    config: &CropConfig,
    focus: Point,
    a: f64,
) {
    if !a.is_finite() {
        return;
    }
    let a = a.clamp(0.0, 1.0);

    let over = overscroll(transform.display_rect(extent), viewport);
    transform.translate(-over * a);

    let ratio = overscale_ratio(transform.scale, config.min_scale, config.max_scale);
    let target = transform.scale / ratio;
    let new_scale = (1.0 - a) * transform.scale + a * target;
    tracing::trace!(a, overscroll_x = over.x, overscroll_y = over.y, ratio, "settle tick");

    scale_keeping_focus(transform, extent, new_scale, focus);
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Size, Vec2};

    use super::{SettleAnimator, SettleState, decelerate, settle_step};
    use crate::{CropConfig, CropError, MAX_SCALE, Transform, overscroll};

    #[test]
    fn idle_animator_ignores_advance() {
        let mut anim = SettleAnimator::default();
        assert_eq!(anim.state(), SettleState::Idle);
        assert_eq!(anim.advance(Duration::from_millis(16)), None);
    }

    #[test]
    fn start_while_running_is_rejected_until_cancelled() {
        let mut anim = SettleAnimator::default();
        anim.start().unwrap();
        assert!(anim.is_running());
        assert_eq!(anim.start(), Err(CropError::AlreadySettling));

        assert!(anim.cancel());
        assert!(!anim.cancel());
        assert_eq!(anim.start(), Ok(()));
    }

    #[test]
    fn advance_eases_and_finishes_at_one() {
        let mut anim = SettleAnimator::new(Duration::from_millis(400), 0.25);
        anim.start().unwrap();

        let a1 = anim.advance(Duration::from_millis(100)).unwrap();
        let a2 = anim.advance(Duration::from_millis(100)).unwrap();
        assert!((a1 - decelerate(0.25, 0.25)).abs() < 1e-9);
        assert!((a2 - decelerate(0.5, 0.25)).abs() < 1e-9);
        assert!(a2 > a1 && a2 < 1.0);
        assert_eq!(
            anim.state(),
            SettleState::Running {
                elapsed: Duration::from_millis(200)
            }
        );

        assert_eq!(anim.advance(Duration::from_millis(250)), Some(1.0));
        assert_eq!(anim.state(), SettleState::Idle);
        assert_eq!(anim.advance(Duration::from_millis(16)), None);
    }

    #[test]
    fn decelerate_curve_shape() {
        assert_eq!(decelerate(0.0, 0.25), 0.0);
        assert_eq!(decelerate(1.0, 0.25), 1.0);
        assert!((decelerate(0.75, 0.25) - 0.5).abs() < 1e-12);
        assert!((decelerate(0.5, 1.0) - 0.75).abs() < 1e-12);
        assert_eq!(decelerate(-1.0, 0.25), 0.0);
        assert_eq!(decelerate(2.0, 0.25), 1.0);
    }

    #[test]
    fn full_tick_removes_overscroll() {
        let extent = Size::new(2000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let mut t = Transform::new(1.0, Vec2::new(120.0, 40.0));
        let config = CropConfig::default();

        settle_step(&mut t, extent, viewport, &config, Point::new(500.0, 500.0), 1.0);

        assert_eq!(t.scale, 1.0);
        assert!(overscroll(t.display_rect(extent), viewport).length() < 1e-9);
    }

    #[test]
    fn partial_tick_moves_part_way() {
        let extent = Size::new(2000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let mut t = Transform::new(1.0, Vec2::new(100.0, 0.0));

        settle_step(
            &mut t,
            extent,
            viewport,
            &CropConfig::default(),
            Point::new(500.0, 500.0),
            0.25,
        );

        assert!((t.offset.x - 75.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_tick_is_a_no_op() {
        let extent = Size::new(2000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let start = Transform::new(1.0, Vec2::new(100.0, 0.0));
        let mut t = start;

        for a in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            settle_step(
                &mut t,
                extent,
                viewport,
                &CropConfig::default(),
                Point::new(500.0, 500.0),
                a,
            );
        }

        assert_eq!(t, start);
    }

    #[test]
    fn full_tick_lands_scale_on_bound() {
        let extent = Size::new(1000.0, 1000.0);
        let viewport = Size::new(1000.0, 1000.0);
        let focus = Point::new(500.0, 500.0);
        let scale = MAX_SCALE * 1.2;
        // Centred, so there is no over-scroll to correct.
        let offset = Vec2::new(500.0 - 500.0 * scale, 500.0 - 500.0 * scale);
        let mut t = Transform::new(scale, offset);

        settle_step(&mut t, extent, viewport, &CropConfig::default(), focus, 1.0);

        assert!((t.scale - MAX_SCALE).abs() < 1e-9);
        assert!((t.display_rect(extent).center() - focus).length() < 1e-9);
    }
}
