// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Pointer position minus the pan offset at the moment the drag started.
    anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag at `pointer` while the image is panned by `pan`.
    pub fn start(&mut self, pointer: Point, pan: Vector) {
        self.anchor = Some(pointer - pan);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Pan offset that keeps the grabbed point under `pointer`.
    #[must_use]
    pub fn pan_for(&self, pointer: Point) -> Option<Vector> {
        self.anchor.map(|anchor| pointer - anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.anchor().is_none());
    }

    #[test]
    fn start_records_anchor_relative_to_pan() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging());
        assert_eq!(state.anchor(), Some(Point::new(80.0, 40.0)));
    }

    #[test]
    fn stop_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(0.0, 0.0));
        state.stop();

        assert!(!state.is_dragging());
        assert!(state.pan_for(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn pan_follows_pointer() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        let pan = state.pan_for(Point::new(180.0, 130.0));

        // Pointer moved by (-20, -20), so the pan moves by the same amount
        assert_eq!(pan, Some(Vector::new(30.0, 10.0)));
    }
}
