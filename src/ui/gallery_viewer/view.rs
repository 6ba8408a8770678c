// SPDX-License-Identifier: MPL-2.0
//! Lightbox layout: header with zoom controls, image stage with arrows,
//! and the dots row.

use super::component::{Message, State};
use super::session::Session;
use crate::i18n::fluent::I18n;
use crate::media::{Entry, ImageCache};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::{AnimatedSpinner, ImageEvent, TransformedImage};
use iced::widget::{button, mouse_area, opaque, stack, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub spinner_rotation: f32,
}

/// Maps widget input to viewer messages.
fn image_message(event: ImageEvent) -> Message {
    match event {
        ImageEvent::Pressed(point) => Message::PointerPressed(point),
        ImageEvent::Moved(point) => Message::PointerMoved(point),
        ImageEvent::Released => Message::PointerReleased,
        ImageEvent::Left => Message::PointerLeft,
        ImageEvent::Wheel(delta) => Message::Wheel(delta),
    }
}

/// Renders the open viewer, or `None` while closed.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Option<Element<'a, Message>> {
    let session = state.session()?;

    let panel = Column::new()
        .push(header(&ctx, session))
        .push(stage(&ctx, session))
        .push(dots(session))
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill);

    // The panel swallows presses so only the dimmed margin closes the viewer
    let panel = opaque(Container::new(panel).padding(spacing::MD));

    let backdrop = Container::new(panel)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    Some(
        mouse_area(backdrop)
            .on_press(Message::BackdropPressed)
            .into(),
    )
}

fn control<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::TITLE_SM)
            .align_x(alignment::Horizontal::Center),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::overlay(
        theme::overlay_text_color(),
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message)
    .into()
}

fn header<'a>(ctx: &ViewContext<'a>, session: &'a Session) -> Element<'a, Message> {
    let current = (session.current_index() + 1).to_string();
    let total = session.len().to_string();
    let position = ctx.i18n.tr_with_args(
        "gallery-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    );
    let zoom = ctx.i18n.tr_with_args(
        "gallery-zoom-readout",
        &[("percent", session.scale().percent().to_string().as_str())],
    );

    let title = Column::new()
        .push(Text::new(session.title()).size(typography::TITLE_MD))
        .push(
            Text::new(position)
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .spacing(spacing::XXS);

    let zoom_readout = Container::new(Text::new(zoom).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::SM));

    let row = Row::new()
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(zoom_readout)
        .push(control("−", Message::ZoomOut))
        .push(control("+", Message::ZoomIn))
        .push(control("1:1", Message::ResetZoom))
        .push(control("×", Message::Close))
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    Container::new(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::overlay::controls_container)
        .into()
}

fn stage<'a>(ctx: &ViewContext<'a>, session: &'a Session) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match session
        .current_image()
        .and_then(|image| ctx.images.peek(image))
    {
        Some(Entry::Ready(data)) => TransformedImage::new(
            data.handle.clone(),
            data.width,
            data.height,
            image_message,
        )
        .transform(session.rendered_transform())
        .pannable(session.scale().is_pannable())
        .dragging(session.is_dragging())
        .into(),
        Some(Entry::Failed(_)) => centered(
            Text::new(ctx.i18n.tr("image-load-failed"))
                .color(theme::error_text_color())
                .into(),
        ),
        Some(Entry::Loading) | None => centered(
            AnimatedSpinner::new(theme::spinner_color(), ctx.spinner_rotation).into_element(),
        ),
    };

    let mut arrows = Row::new().align_y(alignment::Vertical::Center);
    if session.has_previous() {
        arrows = arrows.push(arrow("‹", Message::Previous));
    }
    arrows = arrows.push(Space::new().width(Length::Fill));
    if session.has_next() {
        arrows = arrows.push(arrow("›", Message::Next));
    }

    stack![
        picture,
        Container::new(arrows)
            .padding(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn arrow<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::VIEWER_ARROW))
    .height(Length::Fixed(sizing::VIEWER_ARROW))
    .style(styles::button::overlay(
        theme::overlay_text_color(),
        opacity::OVERLAY_STRONG,
        opacity::OPAQUE,
    ))
    .on_press(message)
    .into()
}

fn dots<'a>(session: &'a Session) -> Element<'a, Message> {
    if session.len() < 2 {
        return Space::new().into();
    }

    let row = (0..session.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
        row.push(
            button(Space::new())
                .width(Length::Fixed(sizing::VIEWER_DOT))
                .height(Length::Fixed(sizing::VIEWER_DOT))
                .padding(0)
                .style(styles::button::dot(index == session.current_index()))
                .on_press(Message::Select(index)),
        )
    });

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageRef;
    use crate::ui::state::PageEffects;

    fn refs(len: usize) -> Vec<ImageRef> {
        (0..len)
            .map(|i| ImageRef::new(format!("shots/{i}.png")))
            .collect()
    }

    fn render(state: &State) -> bool {
        let i18n = I18n::default();
        let cache = ImageCache::new(4);
        let rendered = view(
            ViewContext {
                i18n: &i18n,
                images: &cache,
                spinner_rotation: 0.0,
            },
            state,
        )
        .is_some();
        rendered
    }

    #[test]
    fn closed_viewer_renders_nothing() {
        let state = State::new(PageEffects::new());
        assert!(!render(&state));
    }

    #[test]
    fn open_viewer_renders_for_single_and_many_images() {
        for len in [1, 5] {
            let mut state = State::new(PageEffects::new());
            state.open_images("Dashboards", refs(len), 0);
            assert!(render(&state));
        }
    }

    #[test]
    fn widget_events_map_to_pointer_messages() {
        assert!(matches!(
            image_message(ImageEvent::Released),
            Message::PointerReleased
        ));
        assert!(matches!(
            image_message(ImageEvent::Left),
            Message::PointerLeft
        ));
        assert!(matches!(
            image_message(ImageEvent::Pressed(iced::Point::ORIGIN)),
            Message::PointerPressed(_)
        ));
    }
}
