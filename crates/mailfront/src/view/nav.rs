//! Navigation bar.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};
use mailfront_core::{Event, Mailbox, ThemeChoice};

use crate::message::Message;
use crate::style::widgets::{header_style, nav_button_style, palette, toolbar_button_style};

/// Renders the navigation bar: the mailbox buttons, Compose and the theme
/// switch.
pub fn view_nav(theme: ThemeChoice) -> Element<'static, Message> {
    let title = text("Mail")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let nav = |label: &'static str, event: Event| {
        button(text(label).size(14))
            .padding([6, 14])
            .style(nav_button_style)
            .on_press(Message::Core(event))
    };

    let theme_label = match theme {
        ThemeChoice::Light => "\u{263E} Dark",
        ThemeChoice::Dark => "\u{2600} Light",
    };
    let theme_btn = button(text(theme_label).size(13))
        .padding([6, 12])
        .style(toolbar_button_style)
        .on_press(Message::ToggleTheme);

    let bar = row![
        title,
        Space::new().width(Length::Fixed(24.0)),
        nav("Inbox", Event::OpenMailbox(Mailbox::inbox())),
        nav("Compose", Event::ComposeNew),
        nav("Sent", Event::OpenMailbox(Mailbox::sent())),
        nav("Archived", Event::OpenMailbox(Mailbox::archive())),
        Space::new().width(Length::Fill),
        theme_btn,
    ]
    .spacing(8)
    .padding([12, 20])
    .align_y(iced::Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .style(header_style)
        .into()
}
