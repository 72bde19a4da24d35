// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop --heading-base-level=0

//! Understory Crop: a headless model for interactive image cropping.
//!
//! This crate holds the geometry behind a crop widget that shows an image in
//! a fixed viewport and lets the user pan and pinch-zoom it. It focuses on:
//! - A pan + uniform scale [`Transform`] of the image inside the viewport.
//! - Measuring how far the image is out of bounds ([`overscroll`],
//!   [`overscale_ratio`]).
//! - Rubber-band resistance for drags and pinches ([`damp_drag`],
//!   [`damp_scale`]).
//! - Zooming about a focus point ([`scale_keeping_focus`]).
//! - Animating back to a valid state after release ([`SettleAnimator`],
//!   [`settle_step`]).
//!
//! It does **not** decode bitmaps, paint, or own any UI framework objects.
//! Callers are expected to:
//! - Report the viewport size and the image's pixel extent.
//! - Forward pan/pinch input (directly, or as raw pointers through
//!   [`gesture::GestureTracker`]).
//! - Drive the settle animation from their frame clock.
//! - Paint the image into [`ImageCropper::display_rect`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use understory_crop::ImageCropper;
//!
//! let mut cropper = ImageCropper::new();
//! cropper.set_viewport(1000.0, 1000.0).unwrap();
//! cropper.set_image(2000.0, 1000.0).unwrap();
//!
//! // Centre-fit: the short side fills the viewport, overflow is centred.
//! let rect = cropper.display_rect().unwrap();
//! assert_eq!((rect.x0, rect.y0), (-500.0, 0.0));
//!
//! // Drag past the left edge and zoom in beyond the maximum scale.
//! cropper.on_pan(Vec2::new(700.0, 0.0));
//! cropper.on_pinch(4.0, Point::new(500.0, 500.0));
//!
//! // Release and let the settle animation run to completion.
//! cropper.on_release();
//! while cropper.advance(Duration::from_millis(16)) {}
//!
//! assert!(cropper.scale() <= cropper.config().max_scale + 1e-6);
//! assert!(cropper.overscroll().length() < 1e-6);
//! ```
//!
//! ## Design notes
//!
//! - All mutable state lives in one [`ImageCropper`]; the algorithms are free
//!   functions over a `&mut Transform` and explicit context, so hosts that
//!   keep their own state can call them directly.
//! - Handlers must be called serially from one thread. A settle run is
//!   cancelled by any new gesture input before that input is applied.
//! - The display rectangle is always derived from the transform, never stored.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod cropper;
mod error;
mod focus;
pub mod gesture;
mod overscale;
mod resistance;
mod settle;
mod transform;

pub use bounds::{overscroll, overscroll_x, overscroll_y};
pub use config::{
    CropConfig, DECELERATE_FACTOR, MAX_OVER_SCALE, MAX_SCALE, MIN_SCALE, SETTLE_DURATION,
};
pub use cropper::ImageCropper;
pub use error::CropError;
pub use focus::{focus_ratio, scale_keeping_focus};
pub use overscale::overscale_ratio;
pub use resistance::{damp_drag, damp_scale};
pub use settle::{SettleAnimator, SettleState, decelerate, settle_step};
pub use transform::Transform;
