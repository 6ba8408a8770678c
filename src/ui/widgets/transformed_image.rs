// SPDX-License-Identifier: MPL-2.0
//! Image widget that draws a decoded image under a scale-and-pan transform.
//!
//! The image is first fitted inside the widget bounds (aspect preserved),
//! then scaled about the center of that fitted rectangle and offset by the
//! pan vector. Pointer and wheel input over the widget is reported as
//! [`ImageEvent`]s; the owner decides what they mean.

use crate::ui::state::ViewTransform;
use iced::advanced::image::Renderer as _;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::Renderer as _;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::image::Handle;
use iced::{mouse, Element, Event, Length, Point, Rectangle, Size, Theme};

/// Input reported by [`TransformedImage`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageEvent {
    /// Left button pressed over the image area, in window coordinates.
    Pressed(Point),
    /// Cursor moved while a drag is in progress.
    Moved(Point),
    Released,
    /// Cursor left the widget bounds.
    Left,
    Wheel(mouse::ScrollDelta),
}

pub struct TransformedImage<'a, Message> {
    handle: Handle,
    image_size: Size,
    transform: ViewTransform,
    pannable: bool,
    dragging: bool,
    on_event: Box<dyn Fn(ImageEvent) -> Message + 'a>,
}

impl<'a, Message> TransformedImage<'a, Message> {
    pub fn new(
        handle: Handle,
        width: u32,
        height: u32,
        on_event: impl Fn(ImageEvent) -> Message + 'a,
    ) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let image_size = Size::new(width as f32, height as f32);
        Self {
            handle,
            image_size,
            transform: ViewTransform::IDENTITY,
            pannable: false,
            dragging: false,
            on_event: Box::new(on_event),
        }
    }

    #[must_use]
    pub fn transform(mut self, transform: ViewTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Shows the grab cursor when the image can be dragged.
    #[must_use]
    pub fn pannable(mut self, pannable: bool) -> Self {
        self.pannable = pannable;
        self
    }

    #[must_use]
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }
}

#[derive(Debug, Default)]
struct State {
    hovered: bool,
}

/// Largest rectangle with the image's aspect ratio centered in `bounds`.
#[must_use]
pub fn fit_rect(bounds: Rectangle, image_size: Size) -> Rectangle {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rectangle::new(bounds.center(), Size::ZERO);
    }
    let ratio = (bounds.width / image_size.width).min(bounds.height / image_size.height);
    let size = Size::new(image_size.width * ratio, image_size.height * ratio);
    let center = bounds.center();
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Applies `transform` to a fitted rectangle: scale about its center, then pan.
#[must_use]
pub fn transformed_rect(fitted: Rectangle, transform: &ViewTransform) -> Rectangle {
    let size = Size::new(
        fitted.width * transform.scale,
        fitted.height * transform.scale,
    );
    let center = fitted.center() + transform.pan;
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

impl<Message> Widget<Message, Theme, iced::Renderer> for TransformedImage<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let image_bounds = transformed_rect(fit_rect(bounds, self.image_size), &self.transform);

        renderer.with_layer(bounds, |renderer| {
            let image = iced::advanced::image::Image::<Handle> {
                handle: self.handle.clone(),
                filter_method: iced::advanced::image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, image_bounds, bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    shell.publish((self.on_event)(ImageEvent::Pressed(position)));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.dragging {
                    shell.publish((self.on_event)(ImageEvent::Released));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let inside = bounds.contains(*position);
                if state.hovered && !inside {
                    shell.publish((self.on_event)(ImageEvent::Left));
                } else if inside && self.dragging {
                    shell.publish((self.on_event)(ImageEvent::Moved(*position)));
                }
                state.hovered = inside;
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if state.hovered {
                    state.hovered = false;
                    shell.publish((self.on_event)(ImageEvent::Left));
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    shell.publish((self.on_event)(ImageEvent::Wheel(*delta)));
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if self.pannable && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<TransformedImage<'a, Message>> for Element<'a, Message> {
    fn from(widget: TransformedImage<'a, Message>) -> Self {
        Element::new(widget)
    }
}
