// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Tracks the gallery viewer scale and turns wheel input into discrete
//! zoom ticks.

pub use crate::config::{BUTTON_ZOOM_STEP, PIXELS_PER_WHEEL_TICK, WHEEL_ZOOM_STEP};
use crate::domain::ui::ZoomScale;
use iced::mouse;

/// Converts a wheel delta into (possibly fractional) ticks.
///
/// Line deltas already count ticks. Pixel deltas, as sent by touchpads and
/// high resolution wheels, are normalized so that 120 px make one tick.
/// Positive values scroll up, which zooms in.
#[must_use]
pub fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_WHEEL_TICK,
    }
}

/// Viewer scale plus the wheel remainder not yet worth a full tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    scale: ZoomScale,
    pending_ticks: f32,
}

impl ZoomState {
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// Feeds wheel ticks and applies every whole tick as a `0.1` step.
    ///
    /// Returns `true` when the scale changed.
    pub fn apply_wheel(&mut self, steps: f32) -> bool {
        if !steps.is_finite() {
            return false;
        }
        // A reversal discards the remainder so a whole tick is never absorbed
        if steps != 0.0 && self.pending_ticks.signum() != steps.signum() {
            self.pending_ticks = 0.0;
        }
        self.pending_ticks += steps;
        let whole = self.pending_ticks.trunc();
        if whole == 0.0 {
            return false;
        }
        self.pending_ticks -= whole;
        self.set(self.scale.zoom_in(WHEEL_ZOOM_STEP * whole))
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set(self.scale.zoom_in(BUTTON_ZOOM_STEP))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set(self.scale.zoom_out(BUTTON_ZOOM_STEP))
    }

    pub fn reset(&mut self) {
        self.scale = ZoomScale::default();
        self.pending_ticks = 0.0;
    }

    fn set(&mut self, scale: ZoomScale) -> bool {
        let changed = scale != self.scale;
        self.scale = scale;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_deltas_count_ticks() {
        let delta = mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 };
        assert_eq!(scroll_steps(&delta), -2.0);
    }

    #[test]
    fn pixel_deltas_are_normalized() {
        let delta = mouse::ScrollDelta::Pixels { x: 0.0, y: 240.0 };
        assert_eq!(scroll_steps(&delta), 2.0);
    }

    #[test]
    fn five_ticks_reach_one_and_a_half() {
        let mut zoom = ZoomState::default();
        for _ in 0..5 {
            assert!(zoom.apply_wheel(1.0));
        }
        assert_eq!(zoom.scale().value(), 1.5);
    }

    #[test]
    fn wheel_zoom_stops_at_maximum() {
        let mut zoom = ZoomState::default();
        for _ in 0..25 {
            zoom.apply_wheel(1.0);
        }
        assert!(zoom.scale().is_max());
        assert!(!zoom.apply_wheel(1.0));
    }

    #[test]
    fn wheel_zoom_stops_at_minimum() {
        let mut zoom = ZoomState::default();
        for _ in 0..10 {
            zoom.apply_wheel(-1.0);
        }
        assert_eq!(zoom.scale().value(), 0.5);
    }

    #[test]
    fn partial_pixel_ticks_accumulate() {
        let mut zoom = ZoomState::default();
        assert!(!zoom.apply_wheel(0.5));
        assert!(zoom.scale().is_identity());
        assert!(zoom.apply_wheel(0.5));
        assert_eq!(zoom.scale().value(), 1.1);
    }

    #[test]
    fn reversed_tick_is_not_absorbed_by_remainder() {
        let mut zoom = ZoomState::default();
        assert!(!zoom.apply_wheel(0.5));
        assert!(zoom.apply_wheel(-1.0));
        assert_eq!(zoom.scale().value(), 0.9);
    }

    #[test]
    fn buttons_step_by_two_tenths() {
        let mut zoom = ZoomState::default();
        zoom.zoom_in();
        assert_eq!(zoom.scale().value(), 1.2);
        zoom.zoom_out();
        zoom.zoom_out();
        assert_eq!(zoom.scale().value(), 0.8);
    }

    #[test]
    fn reset_restores_identity_and_drops_remainder() {
        let mut zoom = ZoomState::default();
        zoom.apply_wheel(2.5);
        zoom.reset();
        assert!(zoom.scale().is_identity());
        assert!(!zoom.apply_wheel(0.5));
    }

    #[test]
    fn non_finite_steps_are_ignored() {
        let mut zoom = ZoomState::default();
        assert!(!zoom.apply_wheel(f32::INFINITY));
        assert!(zoom.scale().is_identity());
    }
}
