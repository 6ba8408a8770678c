// SPDX-License-Identifier: MPL-2.0
//! Rendering of a preview carousel inside a project card.

use super::component::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::{Entry, ImageCache};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, image, stack, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    /// Current spinner angle for images still loading.
    pub spinner_rotation: f32,
}

/// Text of the `i/len` badge, or `None` when there is only one image.
#[must_use]
pub fn counter_label(state: &State) -> Option<String> {
    (state.len() > 1).then(|| format!("{}/{}", state.current_index() + 1, state.len()))
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let Some(current) = state.current_image() else {
        return placeholder(Text::new(ctx.i18n.tr("preview-no-image")).into());
    };

    let picture: Element<'a, Message> = match ctx.images.peek(current) {
        Some(Entry::Ready(data)) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .into(),
        Some(Entry::Failed(_)) => placeholder(
            Text::new(ctx.i18n.tr("image-load-failed"))
                .color(theme::error_text_color())
                .into(),
        ),
        Some(Entry::Loading) | None => placeholder(
            AnimatedSpinner::new(theme::spinner_color(), ctx.spinner_rotation)
                .with_size(sizing::ICON_LG)
                .into_element(),
        ),
    };

    let mut layers = stack![picture];
    if let Some(label) = counter_label(state) {
        let badge = container(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::FULL));
        layers = layers.push(
            Container::new(badge)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(spacing::XS),
        );
    }

    button(layers)
        .padding(0)
        .style(styles::button::preview)
        .on_press(Message::Pressed)
        .into()
}

fn placeholder(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageRef;
    use crate::domain::ui::PreviewInterval;

    fn state(len: usize) -> State {
        State::new(
            (0..len).map(|i| ImageRef::new(format!("{i}.png"))).collect(),
            PreviewInterval::default(),
        )
    }

    #[test]
    fn counter_only_shown_for_several_images() {
        assert_eq!(counter_label(&state(1)), None);
        assert_eq!(counter_label(&state(4)).as_deref(), Some("1/4"));
    }

    #[test]
    fn preview_view_renders_in_every_state() {
        let i18n = I18n::default();
        let cache = ImageCache::new(4);
        for len in [0, 1, 3] {
            let preview = state(len);
            let _element = view(
                ViewContext {
                    i18n: &i18n,
                    images: &cache,
                    spinner_rotation: 0.0,
                },
                &preview,
            );
        }
    }
}
