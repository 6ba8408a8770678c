// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while an image decodes.
//!
//! The spinner holds no clock of its own; the app advances a shared
//! rotation angle on each spinner tick and every spinner on screen draws
//! that angle.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Fraction of the circle covered by the moving arc.
const ARC_SWEEP: f32 = 0.75;
const ARC_SEGMENTS: u16 = 32;
const STROKE_WIDTH: f32 = 3.0;

pub struct AnimatedSpinner {
    cache: Cache,
    /// Angle in radians, 0 at the top.
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Overrides the default diameter, e.g. for the smaller card previews.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn arc(&self, center: Point, radius: f32) -> Path {
        let start = self.rotation - TAU / 4.0;
        let point_at = |angle: f32| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };

        let mut builder = canvas::path::Builder::new();
        builder.move_to(point_at(start));
        for segment in 1..=ARC_SEGMENTS {
            let t = f32::from(segment) / f32::from(ARC_SEGMENTS);
            builder.line_to(point_at(start + TAU * ARC_SWEEP * t));
        }
        builder.build()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Faint track under the arc
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: 0.2,
                            ..self.color
                        }),
                );

                frame.stroke(
                    &self.arc(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
