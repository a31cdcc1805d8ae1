//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.
//! Everything that concerns mail navigation travels as a core [`Event`];
//! the remaining variants are local to the desktop shell.

use iced::keyboard;
use iced::widget::text_editor;
use mailfront_core::{Event, Settings};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigation, compose and request completions.
    Core(Event),

    /// The body editor changed.
    BodyEdited(text_editor::Action),

    // Settings
    /// Settings loaded from disk.
    SettingsLoaded(Result<Settings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Switch between the light and dark palette.
    ToggleTheme,

    /// Raw keyboard event, checked for shortcuts.
    Keyboard(keyboard::Event),
}
