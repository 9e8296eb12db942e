//! # Main Display Module
//!
//! The dial screen: animated tempo arc behind a BPM readout, the
//! decrement / play-pause / increment row, and a button into settings.

use iced::widget::{button, column, container, row, stack, text, Space};
use iced::{alignment, Alignment, Background, Element, Length};

use super::bpm_dial::BpmDial;
use super::style::{filled, ACCENT, STEP_BUTTON};
use super::DialDisplay;

/// Side length of the round control buttons.
const CONTROL_SIZE: f32 = 36.0;

/// Creates the complete dial screen.
pub fn view(data: &DialDisplay) -> Element<'static, crate::Message> {
    let dial = BpmDial::new(data.start_angle, data.sweep, data.max_sweep).view();

    let readout = container(text(format!("{} BPM", data.bpm)).size(22))
        .padding(10)
        .style(|_theme| container::Style {
            background: Some(Background::Color(iced::Color { a: 0.75, ..STEP_BUTTON })),
            border: iced::border::rounded(25.0),
            ..container::Style::default()
        });

    let play_label = if data.is_playing { "||" } else { ">" };
    let controls = row![
        control_button("-", STEP_BUTTON, crate::Message::Decrement),
        control_button(play_label, ACCENT, crate::Message::TogglePlaying),
        control_button("+", STEP_BUTTON, crate::Message::Increment),
    ]
    .spacing(5)
    .align_y(Alignment::Center);

    let settings = button(text("Settings").size(11))
        .padding([2, 8])
        .style(filled(STEP_BUTTON))
        .on_press(crate::Message::OpenSettings);

    let foreground = container(
        column![
            Space::with_height(30),
            readout,
            Space::with_height(5),
            controls,
            Space::with_height(8),
            settings,
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    container(stack![dial, foreground])
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(2)
        .into()
}

fn control_button(
    label: &'static str,
    color: iced::Color,
    message: crate::Message,
) -> Element<'static, crate::Message> {
    button(
        text(label)
            .size(16)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(CONTROL_SIZE))
    .height(Length::Fixed(CONTROL_SIZE))
    .style(filled(color))
    .on_press(message)
    .into()
}
