//! Shared colors and button styles.

use iced::widget::button;
use iced::{Background, Color, Theme};

/// Blue-grey accent used for the dial arc and active controls.
pub const ACCENT: Color = Color { r: 0.4, g: 0.533, b: 0.75, a: 0.75 };
/// Inactive switch background.
pub const INACTIVE: Color = Color { r: 0.533, g: 0.533, b: 0.533, a: 0.75 };
/// Tempo step buttons.
pub const STEP_BUTTON: Color = Color { r: 0.267, g: 0.267, b: 0.267, a: 0.85 };

/// Solid-colored round button with white text.
pub fn filled(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color { a: 1.0, ..color },
            _ => color,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: iced::border::rounded(15.0),
            ..button::Style::default()
        }
    }
}

/// Accent when `enabled`, grey otherwise.
pub fn switch(enabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    filled(if enabled { ACCENT } else { INACTIVE })
}
