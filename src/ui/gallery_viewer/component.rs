// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer state machine.
//!
//! The viewer is either `Closed` or holds an open [`Session`]. Every
//! operation is total: requests that make no sense in the current state
//! (navigating past either end, opening an empty gallery, dragging an
//! unzoomed image) are silently ignored and yield [`Effect::None`].

use super::session::Session;
use crate::config::ANIMATION_FRAME_MS;
use crate::domain::gallery::{Gallery, ImageRef, ImageSet};
use crate::ui::state::{zoom::scroll_steps, PageEffects};
use iced::{event, keyboard, mouse, time, Point, Subscription};
use std::time::{Duration, Instant};

/// Messages for the gallery viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the next image.
    Next,
    /// Show the previous image.
    Previous,
    /// Jump to an image from the dots row.
    Select(usize),
    /// Close control pressed.
    Close,
    /// Press on the dimmed area around the viewer.
    BackdropPressed,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Wheel scrolled over the image.
    Wheel(mouse::ScrollDelta),
    /// Left button pressed over the image.
    PointerPressed(Point),
    /// Pointer moved while a drag may be active.
    PointerMoved(Point),
    PointerReleased,
    /// Pointer left the image region.
    PointerLeft,
    /// Key pressed while the viewer listens to the keyboard.
    KeyPressed(keyboard::Key),
    /// Animation frame for transform easing.
    Frame(Instant),
}

/// Notifications for the owner of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened,
    Closed { last_index: usize },
    IndexChanged(usize),
}

/// Gallery viewer state.
#[derive(Debug)]
pub struct State {
    session: Option<Session>,
    page_effects: PageEffects,
    close_on_backdrop: bool,
}

impl State {
    /// Creates a closed viewer that takes its scroll lock and keyboard
    /// listener from `page_effects`.
    #[must_use]
    pub fn new(page_effects: PageEffects) -> Self {
        Self {
            session: None,
            page_effects,
            close_on_backdrop: crate::config::DEFAULT_CLOSE_ON_BACKDROP,
        }
    }

    /// Whether a press on the backdrop closes the viewer.
    #[must_use]
    pub fn with_close_on_backdrop(mut self, enabled: bool) -> Self {
        self.close_on_backdrop = enabled;
        self
    }

    pub fn set_close_on_backdrop(&mut self, enabled: bool) {
        self.close_on_backdrop = enabled;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(Session::current_index)
    }

    #[must_use]
    pub fn page_effects(&self) -> &PageEffects {
        &self.page_effects
    }

    /// Opens `gallery` at `start_index`.
    ///
    /// An out-of-range index is rejected. Opening while already open
    /// replaces the session; the old handles are released before new ones
    /// are taken.
    pub fn open(&mut self, gallery: Gallery, start_index: usize) -> Effect {
        if !gallery.images.contains_index(start_index) {
            tracing::debug!(
                title = %gallery.title,
                start_index,
                len = gallery.images.len(),
                "ignoring gallery open with out-of-range index"
            );
            return Effect::None;
        }

        // Release the previous session first so counts never exceed one
        self.session = None;

        tracing::debug!(title = %gallery.title, start_index, "gallery viewer opened");
        let scroll_lock = self.page_effects.lock_scroll();
        let listener = self.page_effects.attach_listener();
        self.session = Some(Session::new(gallery, start_index, scroll_lock, listener));
        Effect::Opened
    }

    /// Opens a gallery built from a raw image list. An empty list leaves
    /// the viewer untouched.
    pub fn open_images(
        &mut self,
        title: impl Into<String>,
        images: impl IntoIterator<Item = ImageRef>,
        start_index: usize,
    ) -> Effect {
        match ImageSet::new(images) {
            Some(images) => self.open(Gallery::new(title, images), start_index),
            None => {
                tracing::debug!("ignoring gallery open with no images");
                Effect::None
            }
        }
    }

    /// Closes the viewer, releasing the scroll lock and keyboard listener.
    pub fn close(&mut self) -> Effect {
        match self.session.take() {
            Some(session) => {
                let last_index = session.current_index();
                tracing::debug!(title = %session.title(), last_index, "gallery viewer closed");
                Effect::Closed { last_index }
            }
            None => Effect::None,
        }
    }

    /// Moves to the next image. No-op on the last image.
    pub fn next(&mut self) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if !session.has_next() {
            return Effect::None;
        }
        let index = session.current_index() + 1;
        Self::navigate(session, index)
    }

    /// Moves to the previous image. No-op on the first image.
    pub fn prev(&mut self) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if !session.has_previous() {
            return Effect::None;
        }
        let index = session.current_index() - 1;
        Self::navigate(session, index)
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Effect {
        match self.session.as_mut() {
            Some(session) => Self::navigate(session, index),
            None => Effect::None,
        }
    }

    fn navigate(session: &mut Session, index: usize) -> Effect {
        if session.go_to(index) {
            tracing::debug!(index, len = session.len(), "gallery viewer index changed");
            Effect::IndexChanged(index)
        } else {
            Effect::None
        }
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Next => self.next(),
            Message::Previous => self.prev(),
            Message::Select(index) => self.select(index),
            Message::Close => self.close(),
            Message::BackdropPressed => {
                if self.close_on_backdrop {
                    self.close()
                } else {
                    Effect::None
                }
            }
            Message::KeyPressed(key) => self.handle_key(&key),
            Message::ZoomIn => {
                self.with_session(|session| {
                    session.zoom_in();
                });
                Effect::None
            }
            Message::ZoomOut => {
                self.with_session(|session| {
                    session.zoom_out();
                });
                Effect::None
            }
            Message::ResetZoom => {
                self.with_session(Session::reset_view);
                Effect::None
            }
            Message::Wheel(delta) => {
                let steps = scroll_steps(&delta);
                self.with_session(|session| {
                    session.apply_wheel(steps);
                });
                Effect::None
            }
            Message::PointerPressed(position) => {
                self.with_session(|session| {
                    session.begin_drag(position);
                });
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.with_session(|session| {
                    session.drag_to(position);
                });
                Effect::None
            }
            Message::PointerReleased | Message::PointerLeft => {
                self.with_session(Session::end_drag);
                Effect::None
            }
            Message::Frame(now) => {
                self.with_session(|session| {
                    session.advance_animation(now);
                });
                Effect::None
            }
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => self.close(),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => self.next(),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => self.prev(),
            _ => Effect::None,
        }
    }

    fn with_session(&mut self, f: impl FnOnce(&mut Session)) {
        if let Some(session) = self.session.as_mut() {
            f(session);
        }
    }

    /// Whether the keyboard listener subscription should exist.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.is_open() && self.page_effects.listener_count() > 0
    }

    /// Keyboard routing while open, plus animation frames while easing.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(session) = self.session.as_ref() else {
            return Subscription::none();
        };

        let keys = if self.is_listening() {
            event::listen_with(route_key)
        } else {
            Subscription::none()
        };

        let frames = if session.is_animating() && !session.is_dragging() {
            time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, frames])
    }
}

fn route_key(
    event: iced::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key @ keyboard::Key::Named(
                keyboard::key::Named::Escape
                | keyboard::key::Named::ArrowLeft
                | keyboard::key::Named::ArrowRight,
            ),
            ..
        }) => Some(Message::KeyPressed(key)),
        _ => None,
    }
}
