//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Navigation bar style with bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Panel background.
pub fn panel_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Header block of the single-email view.
pub fn email_header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind an alert.
pub fn backdrop_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.backdrop)),
        ..Default::default()
    }
}

/// Alert dialog card.
pub fn alert_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.accent_red,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::large(),
        ..Default::default()
    }
}
