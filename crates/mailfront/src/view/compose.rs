//! Compose form.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_editor, text_input};
use iced::{Element, Length};
use mailfront_core::{Draft, DraftField, Event};

use crate::message::Message;
use crate::style::widgets::{input_style, palette, panel_style, primary_button_style};

/// Renders the compose form. The body is edited through `body`, which the
/// application keeps in step with `draft.body`.
pub fn view_compose<'a>(draft: &Draft, body: &'a text_editor::Content) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("New Email").size(28).color(p.text_primary);

    let to_row = field_row(
        "To:",
        &draft.recipients,
        "Recipients, separated by commas",
        DraftField::Recipients,
    );
    let subject_row = field_row("Subject:", &draft.subject, "Subject", DraftField::Subject);

    let body_input = text_editor(body)
        .placeholder("Body")
        .on_action(Message::BodyEdited)
        .padding(12)
        .height(Length::Fixed(280.0));

    let send_btn = button(text("Send").size(14))
        .padding([10, 20])
        .style(primary_button_style)
        .on_press(Message::Core(Event::Send));

    let content = column![
        title,
        Space::new().height(Length::Fixed(20.0)),
        to_row,
        subject_row,
        Space::new().height(Length::Fixed(8.0)),
        body_input,
        Space::new().height(Length::Fixed(12.0)),
        send_btn,
    ]
    .spacing(12)
    .padding(24)
    .width(Length::Fill);

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

/// Creates a labeled input field row.
fn field_row(
    label: &str,
    value: &str,
    placeholder: &str,
    field: DraftField,
) -> Element<'static, Message> {
    let p = palette::current();
    let label_text = text(label.to_string())
        .size(14)
        .color(p.text_secondary)
        .width(Length::Fixed(80.0));

    let input = text_input(placeholder, value)
        .on_input(move |value| Message::Core(Event::DraftEdited(field, value)))
        .padding(10)
        .size(14)
        .style(input_style)
        .width(Length::Fill);

    row![label_text, input]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
}
