//! # BPM Dial Widget
//!
//! Draws the tempo arc around the edge of the round display. A faint track
//! shows the full range and the accent arc shows the current tempo.

use iced::widget::canvas::{self, path::Arc, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme};

use super::style::ACCENT;

/// Arc diameter relative to the smaller side of the canvas.
const DIAL_SCALE: f32 = 0.9;
const STROKE_WIDTH: f32 = 8.0;

pub struct BpmDial {
    start_angle: f32,
    sweep: f32,
    max_sweep: f32,
}

impl BpmDial {
    /// Angles in degrees, clockwise from 3 o'clock.
    pub fn new(start_angle: f32, sweep: f32, max_sweep: f32) -> Self {
        Self {
            start_angle,
            sweep,
            max_sweep,
        }
    }

    pub fn view(self) -> Element<'static, crate::Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn arc(&self, bounds: Rectangle, sweep: f32) -> Path {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) * DIAL_SCALE / 2.0;
        let start = self.start_angle;
        Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start.to_radians()),
                end_angle: Radians((start + sweep).to_radians()),
            })
        })
    }
}

impl<Message> canvas::Program<Message> for BpmDial {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let track = self.arc(bounds, self.max_sweep);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.15, ..ACCENT })
                .with_line_cap(LineCap::Round),
        );

        let arc = self.arc(bounds, self.sweep);
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(ACCENT)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
