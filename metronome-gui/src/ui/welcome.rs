//! Welcome screen shown once at startup.

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

use super::style::{filled, ACCENT};

pub fn view() -> Element<'static, crate::Message> {
    let content = column![
        text("Welcome!").size(24).color(ACCENT),
        Space::with_height(12),
        button(text("Start").size(16))
            .padding([6, 18])
            .style(filled(ACCENT))
            .on_press(crate::Message::Start),
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
