//! Mailbox listing.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};
use mailfront_core::{EmailSummary, Event, MailboxView, RowTone};

use crate::message::Message;
use crate::style::widgets::{
    palette, panel_style, read_row_style, scrollable_style, unread_row_style,
};

type ButtonStyle = fn(&iced::Theme, button::Status) -> button::Style;

/// Renders a mailbox heading followed by one row per email, in backend
/// order.
pub fn view_mailbox(view: &MailboxView) -> Element<'static, Message> {
    let p = palette::current();

    let heading = text(view.mailbox.heading())
        .size(28)
        .color(p.text_primary);

    let rows = view.emails.iter().fold(Column::new(), |rows, summary| {
        rows.push(view_row(summary, view))
    });

    let content = column![
        heading,
        Space::new().height(Length::Fixed(16.0)),
        scrollable(rows.width(Length::Fill))
            .height(Length::Fill)
            .style(scrollable_style),
    ]
    .padding(24)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

/// One summary row: sender, subject and timestamp. Read mail is dimmed.
fn view_row(summary: &EmailSummary, view: &MailboxView) -> Element<'static, Message> {
    let p = palette::current();

    let style: ButtonStyle = match summary.tone() {
        RowTone::Muted => read_row_style,
        RowTone::Neutral => unread_row_style,
    };

    let sender = text(summary.sender.clone())
        .size(14)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .width(Length::Fixed(220.0));
    let subject = text(summary.subject.clone()).size(14);
    let timestamp = text(summary.timestamp.clone())
        .size(13)
        .color(p.text_secondary);

    let line = row![sender, subject, Space::new().width(Length::Fill), timestamp]
        .spacing(12)
        .align_y(iced::Alignment::Center);

    button(line)
        .width(Length::Fill)
        .padding([10, 14])
        .style(style)
        .on_press(Message::Core(Event::OpenEmail {
            id: summary.id,
            origin: view.mailbox.clone(),
        }))
        .into()
}
