// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user-facing outcomes (fallbacks, resume export).
//!
//! Notifications carry an i18n key resolved at render time, so switching
//! language re-renders them correctly. At most [`MAX_VISIBLE`] are shown;
//! the rest wait in a queue.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity determines the accent color and how long a toast stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an interpolation argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_after()
            .is_some_and(|after| now.saturating_duration_since(self.created_at) >= after)
    }

    fn text(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }
        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check for expired toasts.
    Tick(Instant),
}

/// Visible toasts (newest first) plus the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(key = notification.message_key(), severity = ?notification.severity(), "notification");
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a notification. Returns `false` if it was not found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible toast whose display time has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            // The display timer starts when the toast becomes visible
            next.created_at = Instant::now();
            self.visible.push_back(next);
        }
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }
}

fn toast<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity.color();

    let content = Row::new()
        .push(
            Text::new(notification.text(i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::BODY_LG))
                .padding([0.0, spacing::XS])
                .style(button::text)
                .on_press(Message::Dismiss(notification.id)),
        )
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: iced::Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Toasts stacked in the bottom-right corner, or `None` when there are none.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Option<Element<'a, Message>> {
    if !manager.has_notifications() {
        return None;
    }

    let column = manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, notification| {
            column.push(toast(notification, i18n))
        })
        .align_x(alignment::Horizontal::Right);

    Some(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_waits_in_queue_and_is_promoted() {
        let mut manager = Manager::new();
        let ids: Vec<_> = (0..MAX_VISIBLE + 1)
            .map(|_| {
                let notification = Notification::error("error-io");
                let id = notification.id();
                manager.push(notification);
                id
            })
            .collect();

        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert_eq!(manager.queued_len(), 1);

        assert!(manager.dismiss(ids[0]));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert_eq!(manager.queued_len(), 0);
    }

    #[test]
    fn warnings_expire_and_errors_stay() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("error-io"));

        manager.tick(Instant::now() + Duration::from_secs(6));

        let remaining: Vec<_> = manager.visible().map(Notification::severity).collect();
        assert_eq!(remaining, vec![Severity::Error]);
    }

    #[test]
    fn dismissing_unknown_id_is_noop() {
        let mut manager = Manager::new();
        let stray = Notification::success("resume-saved").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn overlay_only_rendered_with_notifications() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        assert!(view_overlay(&manager, &i18n).is_none());
        manager.push(Notification::success("resume-saved").with_arg("path", "/tmp/cv.pdf"));
        assert!(view_overlay(&manager, &i18n).is_some());
    }
}
