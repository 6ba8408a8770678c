// SPDX-License-Identifier: MPL-2.0
//! Preview carousel state.
//!
//! Each project card owns one carousel. With two or more images it advances
//! on a fixed interval and wraps around; with fewer it never moves. The
//! timer is a subscription derived from this state, so a carousel that is
//! not rendered (or is paused) receives no ticks.

use crate::domain::gallery::ImageRef;
use crate::domain::ui::PreviewInterval;
use iced::{time, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Rotation timer fired.
    Tick,
    /// The preview image was pressed.
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The displayed image changed.
    Advanced(usize),
    /// Open the gallery viewer at the displayed image.
    OpenGallery { index: usize },
}

#[derive(Debug, Clone)]
pub struct State {
    images: Vec<ImageRef>,
    current_index: usize,
    interval: PreviewInterval,
    paused: bool,
}

impl State {
    #[must_use]
    pub fn new(images: Vec<ImageRef>, interval: PreviewInterval) -> Self {
        Self {
            images,
            current_index: 0,
            interval,
            paused: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.current_index)
    }

    #[must_use]
    pub fn interval(&self) -> PreviewInterval {
        self.interval
    }

    pub fn set_interval(&mut self, interval: PreviewInterval) {
        self.interval = interval;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether the rotation timer should be running.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        !self.paused && self.images.len() >= 2
    }

    /// Moves to the next image, wrapping at the end. Returns `false` when
    /// there is nothing to rotate through.
    pub fn advance(&mut self) -> bool {
        if self.images.len() < 2 {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
        true
    }

    /// Shows `index` if it is in range, e.g. to follow the gallery viewer.
    pub fn show(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Tick => {
                // A tick may still be in flight after pausing
                if self.is_rotating() && self.advance() {
                    Effect::Advanced(self.current_index)
                } else {
                    Effect::None
                }
            }
            Message::Pressed => {
                if self.images.is_empty() {
                    Effect::None
                } else {
                    Effect::OpenGallery {
                        index: self.current_index,
                    }
                }
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_rotating() {
            time::every(self.interval.as_duration()).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
