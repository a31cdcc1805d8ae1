//! Modal alert drawn over the current panel.

use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Element, Length};
use mailfront_core::Event;

use crate::message::Message;
use crate::style::widgets::{alert_style, backdrop_style, palette, primary_button_style};

/// Overlays `message` on `base`. The panel underneath does not receive
/// input until the alert is dismissed.
pub fn with_alert<'a>(base: Element<'a, Message>, message: &str) -> Element<'a, Message> {
    let p = palette::current();

    let dialog = container(
        column![
            text(message.to_string()).size(15).color(p.text_primary),
            button(text("OK").size(14))
                .padding([8, 20])
                .style(primary_button_style)
                .on_press(Message::Core(Event::DismissAlert)),
        ]
        .spacing(16)
        .align_x(iced::Alignment::End),
    )
    .padding(20)
    .max_width(420)
    .style(alert_style);

    stack![
        base,
        opaque(
            mouse_area(
                center(opaque(dialog))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(backdrop_style)
            )
            .on_press(Message::Core(Event::DismissAlert))
        )
    ]
    .into()
}
