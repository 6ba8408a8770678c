// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is always rendered. The gallery viewer and the toasts are
//! layered above it; while the viewer is open the page scrollable ignores
//! scroll input and the viewer's backdrop takes every pointer event.

use super::Message;
use crate::content::Portfolio;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::gallery_viewer;
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::preview;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub previews: &'a [preview::State],
    pub viewer: &'a gallery_viewer::State,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = page::view(page::ViewContext {
        i18n: ctx.i18n,
        portfolio: ctx.portfolio,
        previews: ctx.previews,
        images: ctx.images,
        spinner_rotation: ctx.spinner_rotation,
        scroll_locked: ctx.viewer.page_effects().is_scroll_locked(),
    })
    .map(Message::Page);

    let mut layers = Stack::new()
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(viewer) = gallery_viewer::view(
        gallery_viewer::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            spinner_rotation: ctx.spinner_rotation,
        },
        ctx.viewer,
    ) {
        layers = layers.push(viewer.map(Message::Viewer));
    }

    if let Some(toasts) = notifications::view_overlay(ctx.notifications, ctx.i18n) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}
