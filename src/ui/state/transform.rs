// SPDX-License-Identifier: MPL-2.0
//! Rendered transform smoothing.
//!
//! The viewer keeps a *target* transform (what the user asked for) and a
//! *rendered* transform that eases toward it with an exponential curve.
//! While dragging, the rendered transform snaps so the image sticks to the
//! pointer.

use crate::config::TRANSFORM_EASING_MS;
use iced::Vector;
use std::time::{Duration, Instant};

/// Scale difference below which the transforms count as equal.
const SCALE_EPSILON: f32 = 0.001;

/// Pan difference (in logical pixels) below which the transforms count as equal.
const PAN_EPSILON: f32 = 0.25;

/// Scale then pan, as applied to the fitted image rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub pan: Vector,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        pan: Vector::ZERO,
    };

    #[must_use]
    pub fn new(scale: f32, pan: Vector) -> Self {
        Self { scale, pan }
    }

    /// Translation applied before scaling, `pan / scale`.
    ///
    /// Scaling this translation back up yields exactly `pan` on screen.
    #[must_use]
    pub fn pre_scale_translation(&self) -> Vector {
        Vector::new(self.pan.x / self.scale, self.pan.y / self.scale)
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.scale - other.scale).abs() < SCALE_EPSILON
            && (self.pan.x - other.pan.x).abs() < PAN_EPSILON
            && (self.pan.y - other.pan.y).abs() < PAN_EPSILON
    }

    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            pan: self.pan + (other.pan - self.pan) * t,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Eases the rendered transform toward a target over successive frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSmoothing {
    rendered: ViewTransform,
    last_frame: Option<Instant>,
    time_constant: Duration,
}

impl Default for TransformSmoothing {
    fn default() -> Self {
        Self {
            rendered: ViewTransform::IDENTITY,
            last_frame: None,
            time_constant: Duration::from_millis(TRANSFORM_EASING_MS),
        }
    }
}

impl TransformSmoothing {
    #[must_use]
    pub fn rendered(&self) -> ViewTransform {
        self.rendered
    }

    /// Whether frames are still needed to reach `target`.
    #[must_use]
    pub fn is_animating(&self, target: &ViewTransform) -> bool {
        !self.rendered.approx_eq(target)
    }

    /// Jumps straight to `target`.
    pub fn snap(&mut self, target: ViewTransform) {
        self.rendered = target;
        self.last_frame = None;
    }

    /// Advances the easing to `now`. Returns `true` while still animating.
    pub fn advance(&mut self, target: ViewTransform, now: Instant) -> bool {
        let elapsed = match self.last_frame {
            Some(previous) => now.saturating_duration_since(previous),
            // First frame of an animation: assume a nominal frame interval
            None => Duration::from_millis(crate::config::ANIMATION_FRAME_MS),
        };
        self.last_frame = Some(now);
        self.step(target, elapsed)
    }

    /// Advances the easing by `elapsed`. Returns `true` while still animating.
    pub fn step(&mut self, target: ViewTransform, elapsed: Duration) -> bool {
        let tau = self.time_constant.as_secs_f32();
        let t = if tau <= 0.0 {
            1.0
        } else {
            1.0 - (-elapsed.as_secs_f32() / tau).exp()
        };
        self.rendered = self.rendered.lerp(&target, t.clamp(0.0, 1.0));

        if self.rendered.approx_eq(&target) {
            self.snap(target);
            false
        } else {
            true
        }
    }
}
