// SPDX-License-Identifier: MPL-2.0
//! One open gallery viewer session.
//!
//! A session exists only between open and close. It owns the page scroll
//! lock and the keyboard listener handle, so dropping the session is the
//! only cleanup ever needed.

use crate::domain::gallery::{Gallery, ImageRef};
use crate::domain::ui::ZoomScale;
use crate::ui::state::{
    DragState, ListenerHandle, ScrollLock, TransformSmoothing, ViewTransform, ZoomState,
};
use iced::{Point, Vector};
use std::time::Instant;

#[derive(Debug)]
pub struct Session {
    gallery: Gallery,
    current_index: usize,
    zoom: ZoomState,
    pan: Vector,
    drag: DragState,
    smoothing: TransformSmoothing,
    _scroll_lock: ScrollLock,
    _listener: ListenerHandle,
}

impl Session {
    /// Starts a session. The caller guarantees `start_index` is in range.
    pub(super) fn new(
        gallery: Gallery,
        start_index: usize,
        scroll_lock: ScrollLock,
        listener: ListenerHandle,
    ) -> Self {
        debug_assert!(gallery.images.contains_index(start_index));
        Self {
            gallery,
            current_index: start_index,
            zoom: ZoomState::default(),
            pan: Vector::ZERO,
            drag: DragState::default(),
            smoothing: TransformSmoothing::default(),
            _scroll_lock: scroll_lock,
            _listener: listener,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.gallery.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gallery.images.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.gallery.images.get(self.current_index)
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.zoom.scale()
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index < self.gallery.images.last_index()
    }

    /// The transform the user asked for.
    #[must_use]
    pub fn target_transform(&self) -> ViewTransform {
        ViewTransform::new(self.zoom.scale().value(), self.pan)
    }

    /// The transform currently on screen.
    #[must_use]
    pub fn rendered_transform(&self) -> ViewTransform {
        self.smoothing.rendered()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.smoothing.is_animating(&self.target_transform())
    }

    pub(super) fn go_to(&mut self, index: usize) -> bool {
        if !self.gallery.images.contains_index(index) {
            return false;
        }
        self.current_index = index;
        self.reset_view();
        // A new image starts from identity rather than easing out of the old one
        self.smoothing.snap(self.target_transform());
        true
    }

    /// Resets scale and pan, ending any drag.
    pub(super) fn reset_view(&mut self) {
        self.zoom.reset();
        self.pan = Vector::ZERO;
        self.drag.stop();
    }

    pub(super) fn zoom_in(&mut self) -> bool {
        self.zoom.zoom_in()
    }

    pub(super) fn zoom_out(&mut self) -> bool {
        let changed = self.zoom.zoom_out();
        self.end_drag_if_unpannable();
        changed
    }

    pub(super) fn apply_wheel(&mut self, steps: f32) -> bool {
        let changed = self.zoom.apply_wheel(steps);
        self.end_drag_if_unpannable();
        changed
    }

    pub(super) fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.zoom.scale().is_pannable() {
            return false;
        }
        self.drag.start(pointer, self.pan);
        true
    }

    pub(super) fn drag_to(&mut self, pointer: Point) -> bool {
        match self.drag.pan_for(pointer) {
            Some(pan) => {
                self.pan = pan;
                self.smoothing.snap(self.target_transform());
                true
            }
            None => false,
        }
    }

    pub(super) fn end_drag(&mut self) {
        self.drag.stop();
    }

    pub(super) fn advance_animation(&mut self, now: Instant) -> bool {
        if self.drag.is_dragging() {
            self.smoothing.snap(self.target_transform());
            return false;
        }
        let target = self.target_transform();
        self.smoothing.advance(target, now)
    }

    fn end_drag_if_unpannable(&mut self) {
        if !self.zoom.scale().is_pannable() {
            self.drag.stop();
        }
    }
}
