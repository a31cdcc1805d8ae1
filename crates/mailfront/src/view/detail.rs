//! Single-email view.

use iced::widget::{Row, button, column, container, row, scrollable, text};
use iced::{Element, Length};
use mailfront_core::{DetailAction, DetailView, Email, Event};

use crate::message::Message;
use crate::style::widgets::{
    email_header_style, palette, panel_style, scrollable_style, toolbar_button_style,
};

/// Renders the email being shown, or a placeholder while it loads.
pub fn view_detail(view: &DetailView) -> Element<'static, Message> {
    let content: Element<'static, Message> = match &view.email {
        Some(email) => view_email(email, view),
        None => text("Loading...")
            .size(16)
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            })
            .into(),
    };

    container(content)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

fn view_email(email: &Email, view: &DetailView) -> Element<'static, Message> {
    let p = palette::current();

    let header = column![
        field("From:", email.sender.clone()),
        field("To:", email.recipients_display()),
        field("Subject:", email.subject.clone()),
        field("Timestamp:", email.timestamp.clone()),
    ]
    .spacing(6);

    let actions = email
        .actions(&view.origin)
        .into_iter()
        .fold(Row::new().spacing(8), |actions, action| {
            actions.push(
                button(text(action.label()).size(14))
                    .padding([8, 14])
                    .style(toolbar_button_style)
                    .on_press(Message::Core(action_event(action, email))),
            )
        });

    let body = text(email.body.clone()).size(15).color(p.text_primary);

    column![
        container(column![header, actions].spacing(14))
            .padding(16)
            .width(Length::Fill)
            .style(email_header_style),
        scrollable(body).height(Length::Fill).style(scrollable_style),
    ]
    .spacing(16)
    .into()
}

/// Event raised by one of the action buttons.
fn action_event(action: DetailAction, email: &Email) -> Event {
    match action {
        DetailAction::Reply => Event::Reply(email.clone()),
        DetailAction::Archive | DetailAction::Unarchive => Event::ToggleArchive {
            id: email.id,
            archived: email.archived,
        },
    }
}

fn field(label: &'static str, value: String) -> Element<'static, Message> {
    let p = palette::current();

    row![
        text(label)
            .size(14)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.text_secondary)
            .width(Length::Fixed(90.0)),
        text(value).size(14).color(p.text_primary),
    ]
    .spacing(8)
    .into()
}

#[cfg(test)]
mod tests {
    use mailfront_core::EmailId;

    use super::*;

    fn email(archived: bool) -> Email {
        Email {
            id: EmailId(9),
            sender: "alice@example.com".into(),
            recipients: vec!["me@example.com".into()],
            subject: "Hello".into(),
            body: "Hi".into(),
            timestamp: "Jan 08 2026, 10:30 AM".into(),
            read: true,
            archived,
        }
    }

    #[test]
    fn test_archive_buttons_carry_displayed_flag() {
        for (action, archived) in [(DetailAction::Archive, false), (DetailAction::Unarchive, true)]
        {
            assert_eq!(
                action_event(action, &email(archived)),
                Event::ToggleArchive {
                    id: EmailId(9),
                    archived,
                }
            );
        }
    }

    #[test]
    fn test_reply_button_carries_email() {
        let original = email(false);
        assert_eq!(
            action_event(DetailAction::Reply, &original),
            Event::Reply(original)
        );
    }
}
