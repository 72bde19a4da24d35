// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking that turns raw touch input into pan and pinch gestures.
//!
//! ## Usage
//!
//! 1) Forward pointer down/move/up events to a [`GestureTracker`].
//! 2) Hand every returned [`GestureEvent`] to
//!    [`ImageCropper::handle_gesture`](crate::ImageCropper::handle_gesture).
//!
//! One active pointer pans; two active pointers pinch about their midpoint and
//! pan with it. Additional pointers are ignored until one of the tracked ones
//! lifts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_crop::gesture::{GestureEvent, GestureTracker, PointerId};
//!
//! let mut tracker = GestureTracker::new();
//! assert_eq!(
//!     tracker.pointer_down(PointerId(1), Point::new(10.0, 20.0)),
//!     Some(GestureEvent::Begin)
//! );
//! assert_eq!(
//!     tracker.pointer_move(PointerId(1), Point::new(15.0, 25.0)),
//!     Some(GestureEvent::Pan(Vec2::new(5.0, 5.0)))
//! );
//! assert_eq!(tracker.pointer_up(PointerId(1)), Some(GestureEvent::Release));
//! ```

use kurbo::{Point, Vec2};

/// Host-assigned identifier of a pointer (finger, pen, mouse button).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// A gesture step derived from pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The first pointer went down; any settle run should stop.
    Begin,
    /// A single pointer moved by the given viewport-space delta.
    Pan(Vec2),
    /// One of two pointers moved.
    ///
    /// `pan` applies before `factor`, so the content under the old midpoint
    /// follows it to `focus` and then scales about it.
    Pinch {
        /// Current span divided by the previous span.
        factor: f64,
        /// Midpoint of the two pointers, in viewport coordinates.
        focus: Point,
        /// Movement of the midpoint since the previous step.
        pan: Vec2,
    },
    /// The last pointer lifted or the gesture was cancelled.
    Release,
}

/// Spans shorter than this (in pixels) only pan.
const MIN_PINCH_SPAN: f64 = 1.0;

#[derive(Clone, Copy, Debug)]
struct Tracked {
    id: PointerId,
    pos: Point,
}

/// Tracks up to two pointers and reports pan/pinch steps between events.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    primary: Option<Tracked>,
    secondary: Option<Tracked>,
}

impl GestureTracker {
    /// Creates a tracker with no active pointers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while at least one pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.primary.is_some()
    }

    /// Returns `true` while two pointers are down.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.secondary.is_some()
    }

    /// Registers a pointer going down at `pos`.
    ///
    /// Returns [`GestureEvent::Begin`] for the first pointer of a gesture.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) -> Option<GestureEvent> {
        let tracked = Tracked { id, pos };
        match (self.primary, self.secondary) {
            (None, _) => {
                self.primary = Some(tracked);
                Some(GestureEvent::Begin)
            }
            (Some(p), None) if p.id != id => {
                self.secondary = Some(tracked);
                None
            }
            _ => None,
        }
    }

    /// Registers a pointer moving to `pos` and returns the resulting step.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> Option<GestureEvent> {
        let mut primary = self.primary?;
        match self.secondary {
            None => {
                if primary.id != id {
                    return None;
                }
                let delta = pos - primary.pos;
                primary.pos = pos;
                self.primary = Some(primary);
                Some(GestureEvent::Pan(delta))
            }
            Some(mut secondary) => {
                let last_span = primary.pos.distance(secondary.pos);
                let last_mid = primary.pos.midpoint(secondary.pos);
                if primary.id == id {
                    primary.pos = pos;
                } else if secondary.id == id {
                    secondary.pos = pos;
                } else {
                    return None;
                }
                self.primary = Some(primary);
                self.secondary = Some(secondary);

                let span = primary.pos.distance(secondary.pos);
                let mid = primary.pos.midpoint(secondary.pos);
                let pan = mid - last_mid;
                if last_span < MIN_PINCH_SPAN || span < MIN_PINCH_SPAN {
                    return Some(GestureEvent::Pan(pan));
                }
                Some(GestureEvent::Pinch {
                    factor: span / last_span,
                    focus: mid,
                    pan,
                })
            }
        }
    }

    /// Registers a pointer lifting.
    ///
    /// Lifting one of two pointers hands panning to the remaining one. Lifting
    /// the last pointer returns [`GestureEvent::Release`].
    pub fn pointer_up(&mut self, id: PointerId) -> Option<GestureEvent> {
        let primary = self.primary?;
        if let Some(secondary) = self.secondary {
            if secondary.id == id {
                self.secondary = None;
            } else if primary.id == id {
                self.primary = Some(secondary);
                self.secondary = None;
            }
            return None;
        }
        if primary.id != id {
            return None;
        }
        self.primary = None;
        Some(GestureEvent::Release)
    }

    /// Drops all pointers, returning [`GestureEvent::Release`] if any were down.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let was_active = self.is_active();
        self.primary = None;
        self.secondary = None;
        was_active.then_some(GestureEvent::Release)
    }
}
