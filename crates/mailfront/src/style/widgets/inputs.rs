//! Compose form inputs and the listing scrollbar.

use iced::widget::{container, scrollable, text_input};
use iced::{Background, Border, Color};

use super::palette::{self, Palette};
use super::shadows;
use super::shadows::radius;

/// Outline of a form field; it takes the accent color while focused.
fn field_border(p: &Palette, status: text_input::Status) -> Border {
    let color = match status {
        text_input::Status::Focused { .. } => p.primary,
        text_input::Status::Hovered => p.text_muted,
        text_input::Status::Active | text_input::Status::Disabled => p.border_medium,
    };
    Border {
        color,
        width: 1.0,
        radius: radius::MEDIUM.into(),
    }
}

/// Style for the To and Subject fields.
pub fn input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();
    let disabled = matches!(status, text_input::Status::Disabled);

    text_input::Style {
        background: Background::Color(if disabled {
            p.background
        } else {
            p.surface_elevated
        }),
        border: field_border(&p, status),
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: if disabled { p.text_muted } else { p.text_primary },
        selection: p.selected,
    }
}

/// A transparent rail carrying a thin scroller of the given color.
fn rail(scroller: Color) -> scrollable::Rail {
    scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(scroller),
            border: Border {
                radius: radius::SMALL.into(),
                ..Border::default()
            },
        },
    }
}

/// Scrollbar for the mailbox listing and email body. Only the vertical
/// scroller reacts to the pointer; nothing scrolls sideways.
pub fn scrollable_style(_theme: &iced::Theme, status: scrollable::Status) -> scrollable::Style {
    let p = palette::current();

    let vertical = match status {
        scrollable::Status::Dragged {
            is_vertical_scrollbar_dragged: true,
            ..
        } => p.primary,
        scrollable::Status::Hovered {
            is_vertical_scrollbar_hovered: true,
            ..
        } => p.primary_light,
        _ => p.border_medium,
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail(vertical),
        horizontal_rail: rail(p.border_medium),
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(p.surface),
            border: Border::default(),
            shadow: shadows::none(),
            icon: p.text_muted,
        },
    }
}
