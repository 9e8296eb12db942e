//! # Settings Screen
//!
//! Three switches rendered as buttons that light up when on, plus a back
//! button. The switches only flip flags.

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};
use metronome_core::SettingsSnapshot;

use super::style::{filled, switch, STEP_BUTTON};

/// Width of each switch button.
const SWITCH_WIDTH: f32 = 150.0;

/// Static switch table: label, message, and how to read its state.
const SWITCHES: &[(&str, crate::Message, fn(&SettingsSnapshot) -> bool)] = &[
    ("Vibration", crate::Message::ToggleVibration, vibration_on),
    ("Slider", crate::Message::ToggleSlider, slider_on),
    ("AI corrector", crate::Message::ToggleAiCorrector, ai_corrector_on),
];

fn vibration_on(s: &SettingsSnapshot) -> bool {
    s.vibration_enabled
}

fn slider_on(s: &SettingsSnapshot) -> bool {
    s.slider_mode_enabled
}

fn ai_corrector_on(s: &SettingsSnapshot) -> bool {
    s.ai_corrector_enabled
}

pub fn view(settings: SettingsSnapshot) -> Element<'static, crate::Message> {
    let switches = SWITCHES.iter().fold(
        column![].spacing(6).align_x(Alignment::Center),
        |col, (label, message, is_on)| {
            col.push(
                button(text(*label).size(14))
                    .width(Length::Fixed(SWITCH_WIDTH))
                    .padding([6, 10])
                    .style(switch(is_on(&settings)))
                    .on_press(message.clone()),
            )
        },
    );

    let back = button(text("Back").size(12))
        .padding([4, 10])
        .style(filled(STEP_BUTTON))
        .on_press(crate::Message::Back);

    let content = column![
        text("Settings").size(18),
        Space::with_height(12),
        switches,
        Space::with_height(12),
        back,
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
