// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! Everything here is derived from state on each call: a timer or listener
//! exists only while the state that needs it says so, and iced drops it as
//! soon as it is no longer returned.

use super::Message;
use crate::ui::gallery_viewer;
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::preview;
use iced::{time, Subscription};
use std::time::Duration;

/// Spinner animation period while images are decoding.
const SPINNER_TICK: Duration = Duration::from_millis(50);

/// How often expired toasts are swept.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Keyboard listener and animation frames of the gallery viewer.
pub fn create_viewer_subscription(viewer: &gallery_viewer::State) -> Subscription<Message> {
    viewer.subscription().map(Message::Viewer)
}

/// One rotation timer per project card that currently rotates.
///
/// Cards are keyed by position so identical intervals stay distinct timers.
pub fn create_preview_subscription(previews: &[preview::State]) -> Subscription<Message> {
    Subscription::batch(previews.iter().enumerate().map(|(card, preview)| {
        preview
            .subscription()
            .with(card)
            .map(|(card, message)| Message::Page(page::Message::Preview { card, message }))
    }))
}

/// Periodic ticks for the loading spinner and notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    let spinner = if is_loading {
        time::every(SPINNER_TICK).map(Message::SpinnerTick)
    } else {
        Subscription::none()
    };

    let notifications = if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|now| Message::Notification(notifications::Message::Tick(now)))
    } else {
        Subscription::none()
    };

    Subscription::batch([spinner, notifications])
}
