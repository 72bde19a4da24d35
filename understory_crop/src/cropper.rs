// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};

use crate::gesture::GestureEvent;
use crate::transform::is_positive;
use crate::{
    CropConfig, CropError, SettleAnimator, SettleState, Transform, damp_drag, damp_scale,
    overscale_ratio, overscroll, scale_keeping_focus, settle_step,
};

/// Interactive crop model: an image extent placed inside a viewport.
///
/// `ImageCropper` is the single owner of all mutable cropping state. Hosts
/// call its handlers serially from one event loop:
/// - [`set_viewport`](Self::set_viewport) / [`set_image`](Self::set_image)
///   from layout and loading code,
/// - [`on_pan`](Self::on_pan) / [`on_pinch`](Self::on_pinch) /
///   [`on_release`](Self::on_release) from gesture recognition (or
///   [`handle_gesture`](Self::handle_gesture) with a
///   [`GestureTracker`](crate::gesture::GestureTracker)),
/// - [`advance`](Self::advance) or [`on_animation_tick`](Self::on_animation_tick)
///   from the frame clock while [`is_settling`](Self::is_settling),
/// - [`display_rect`](Self::display_rect) from paint.
///
/// Every handler is a no-op until an image has been set.
#[derive(Clone, Debug)]
pub struct ImageCropper {
    config: CropConfig,
    viewport: Size,
    image: Option<Size>,
    transform: Transform,
    focus: Point,
    settle: SettleAnimator,
}

impl Default for ImageCropper {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCropper {
    /// Creates a cropper with the default [`CropConfig`] and an empty viewport.
    #[must_use]
    pub fn new() -> Self {
        let config = CropConfig::default();
        Self {
            config,
            viewport: Size::ZERO,
            image: None,
            transform: Transform::IDENTITY,
            focus: Point::ORIGIN,
            settle: SettleAnimator::from_config(&config),
        }
    }

    /// Creates a cropper with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem reported by [`CropConfig::validate`].
    pub fn with_config(config: CropConfig) -> Result<Self, CropError> {
        config.validate()?;
        Ok(Self {
            config,
            settle: SettleAnimator::from_config(&config),
            ..Self::new()
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the loaded image extent, if any.
    #[must_use]
    pub fn image_extent(&self) -> Option<Size> {
        self.image
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Returns the focus point used to anchor scale changes.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Returns the settle animation state.
    #[must_use]
    pub fn settle_state(&self) -> SettleState {
        self.settle.state()
    }

    /// Returns `true` while a settle run is in progress.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_running()
    }

    /// Sets the viewport size and re-centres the image, if one is loaded.
    ///
    /// Any settle run is cancelled since its target has moved.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidViewport`] for negative or non-finite
    /// sizes; the previous viewport is kept.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<(), CropError> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(CropError::InvalidViewport { width, height });
        }
        self.viewport = Size::new(width, height);
        tracing::debug!(width, height, "viewport set");
        if self.image.is_some() {
            self.recenter();
        }
        Ok(())
    }

    /// Loads an image of the given pixel extent and centre-fits it.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidImageExtent`] unless both sides are finite
    /// and positive; the previous image (if any) is kept.
    pub fn set_image(&mut self, width: f64, height: f64) -> Result<(), CropError> {
        let extent = Size::new(width, height);
        if !is_positive(extent) {
            tracing::debug!(width, height, "rejected image extent");
            return Err(CropError::InvalidImageExtent { width, height });
        }
        self.image = Some(extent);
        self.recenter();
        Ok(())
    }

    /// Removes the image; handlers become no-ops again.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.transform = Transform::IDENTITY;
        self.settle.cancel();
    }

    /// Re-applies the centre-fit placement for the current image and viewport.
    pub fn recenter(&mut self) {
        let Some(extent) = self.image else {
            return;
        };
        if self.settle.cancel() {
            tracing::debug!("settle cancelled by re-centre");
        }
        self.transform = Transform::center_fit(extent, self.viewport);
        self.focus = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        tracing::debug!(
            image_width = extent.width,
            image_height = extent.height,
            viewport_width = self.viewport.width,
            viewport_height = self.viewport.height,
            scale = self.transform.scale,
            offset_x = self.transform.offset.x,
            offset_y = self.transform.offset.y,
            "image centre-fit"
        );
    }

    /// Marks the start of a new gesture, stopping any settle run.
    pub fn begin_gesture(&mut self) {
        self.cancel_settle();
    }

    /// Stops the settle animation, leaving the transform where it is.
    pub fn cancel_settle(&mut self) {
        if self.settle.cancel() {
            tracing::debug!(scale = self.transform.scale, "settle cancelled");
        }
    }

    /// Pans the image by `delta`, damped on each axis by its current over-scroll.
    pub fn on_pan(&mut self, delta: Vec2) {
        let Some(extent) = self.image else {
            return;
        };
        self.cancel_settle();
        let over = overscroll(self.transform.display_rect(extent), self.viewport);
        let damped = Vec2::new(
            damp_drag(delta.x, over.x, self.viewport.width),
            damp_drag(delta.y, over.y, self.viewport.height),
        );
        self.transform.translate(damped);
    }

    /// Scales the image by `factor` about `focus`, damped by the current
    /// over-scale.
    ///
    /// `focus` becomes the anchor for the next settle run. Non-positive or
    /// non-finite factors are ignored.
    pub fn on_pinch(&mut self, factor: f64, focus: Point) {
        let Some(extent) = self.image else {
            return;
        };
        if !(factor.is_finite() && factor > 0.0) {
            tracing::debug!(factor, "rejected pinch factor");
            return;
        }
        self.cancel_settle();
        let ratio = self.overscale_ratio();
        let damped = damp_scale(factor, ratio, self.config.max_over_scale);
        let new_scale = self.transform.scale * damped;
        self.focus = focus;
        scale_keeping_focus(&mut self.transform, extent, new_scale, focus);
    }

    /// Ends the current gesture and starts settling, unless already settling.
    pub fn on_release(&mut self) {
        if self.image.is_none() || self.settle.is_running() {
            return;
        }
        if self.settle.start().is_ok() {
            tracing::debug!(
                scale = self.transform.scale,
                offset_x = self.transform.offset.x,
                offset_y = self.transform.offset.y,
                "settle started"
            );
        }
    }

    /// Applies one settle tick with an already-eased interpolant `a` in `[0, 1]`.
    ///
    /// Ticks are only applied while settling; `a >= 1` completes the run.
    /// Non-finite interpolants are dropped.
    pub fn on_animation_tick(&mut self, a: f64) {
        if !self.settle.is_running() {
            return;
        }
        if !a.is_finite() {
            tracing::debug!(a, "rejected settle tick");
            return;
        }
        self.apply_tick(a);
        if a >= 1.0 {
            self.settle.finish();
            tracing::debug!(scale = self.transform.scale, "settle finished");
        }
    }

    /// Advances the settle animation by `dt` of wall-clock time.
    ///
    /// Returns `true` if the animation is still running afterwards, i.e. the
    /// host should schedule another frame.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if let Some(a) = self.settle.advance(dt) {
            self.apply_tick(a);
            if !self.settle.is_running() {
                tracing::debug!(scale = self.transform.scale, "settle finished");
            }
        }
        self.settle.is_running()
    }

    /// Routes a tracked gesture step to the matching handler.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Begin => self.begin_gesture(),
            GestureEvent::Pan(delta) => self.on_pan(delta),
            GestureEvent::Pinch { factor, focus, pan } => {
                self.on_pan(pan);
                self.on_pinch(factor, focus);
            }
            GestureEvent::Release => self.on_release(),
        }
    }

    /// Returns the rectangle the image covers in viewport space, for painting.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        self.image.map(|extent| self.transform.display_rect(extent))
    }

    /// Returns the current per-axis over-scroll, or zero without an image.
    #[must_use]
    pub fn overscroll(&self) -> Vec2 {
        self.display_rect()
            .map_or(Vec2::ZERO, |rect| overscroll(rect, self.viewport))
    }

    /// Returns the current over-scale ratio (`1.0` when within limits).
    #[must_use]
    pub fn overscale_ratio(&self) -> f64 {
        overscale_ratio(
            self.transform.scale,
            self.config.min_scale,
            self.config.max_scale,
        )
    }

    /// Returns the part of the image visible in the viewport, in image pixels.
    ///
    /// The result is clipped to the image bounds. Returns `None` without an
    /// image, or when nothing of the image is visible.
    #[must_use]
    pub fn crop_rect(&self) -> Option<Rect> {
        let extent = self.image?;
        let viewport = self.viewport.to_rect();
        let p0 = self.transform.viewport_to_image_point(viewport.origin())?;
        let p1 = self
            .transform
            .viewport_to_image_point(Point::new(viewport.max_x(), viewport.max_y()))?;
        let visible = Rect::from_points(p0, p1).intersect(extent.to_rect());
        (visible.width() > 0.0 && visible.height() > 0.0).then_some(visible)
    }

    fn apply_tick(&mut self, a: f64) {
        let Some(extent) = self.image else {
            return;
        };
        settle_step(
            &mut self.transform,
            extent,
            self.viewport,
            &self.config,
            self.focus,
            a,
        );
    }
}
