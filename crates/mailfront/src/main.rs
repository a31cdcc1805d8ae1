//! `mailfront` - Desktop client for a REST webmail backend
//!
//! Built with Rust and the iced GUI framework. Navigation state lives in
//! [`mailfront_core::Controller`]; this binary renders it and runs the
//! backend requests it asks for.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod style;
mod view;

use std::sync::Arc;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, text_editor};
use iced::{Element, Length, Subscription, Task};
use mailfront_core::settings::DEFAULT_SERVER;
use mailfront_core::{
    Command, Controller, DraftField, Event, HttpApi, Mailbox, Panel, Screen, Settings,
    ThemeChoice,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::Message;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailfront=debug,mailfront_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mailfront");

    iced::application(Mailfront::new, Mailfront::update, Mailfront::view)
        .title("Mail")
        .subscription(Mailfront::subscription)
        .run()
}

/// Main application state.
struct Mailfront {
    /// Panel state machine.
    controller: Controller,
    /// Backend client; `None` until settings are loaded.
    api: Option<Arc<HttpApi>>,
    /// Persisted settings.
    settings: Settings,
    /// Editor holding the compose body.
    body: text_editor::Content,
    /// Draft revision the editor was last filled from.
    body_revision: u64,
}

impl Default for Mailfront {
    fn default() -> Self {
        let controller = Controller::new();
        let body_revision = controller.draft_revision();
        Self {
            controller,
            api: None,
            settings: Settings::default(),
            body: text_editor::Content::new(),
            body_revision,
        }
    }
}

impl Mailfront {
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        (app, settings_task)
    }

    /// Applies the configured theme to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.settings.theme);
    }

    /// Update state based on message.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Core(event) => return self.dispatch(event),
            Message::BodyEdited(action) => {
                let is_edit = action.is_edit();
                self.body.perform(action);
                if is_edit {
                    return self.dispatch(Event::DraftEdited(DraftField::Body, self.body.text()));
                }
            }
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        info!("Settings loaded, server {}", settings.server());
                        self.settings = settings;
                    }
                    Err(e) => warn!("Failed to load settings: {}", e),
                }
                self.apply_theme();
                self.api = connect(&self.settings).map(Arc::new);
                return self.dispatch(Event::OpenMailbox(Mailbox::inbox()));
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::ToggleTheme => {
                self.settings.theme = match self.settings.theme {
                    ThemeChoice::Light => ThemeChoice::Dark,
                    ThemeChoice::Dark => ThemeChoice::Light,
                };
                self.apply_theme();
                info!("Theme changed to {:?}", self.settings.theme);
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
            Message::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                let alert_open = self.controller.alert().is_some();
                if let Some(event) = shortcut(&key, modifiers, self.controller.panel(), alert_open) {
                    return self.dispatch(event);
                }
            }
            Message::Keyboard(_) => {}
        }
        Task::none()
    }

    /// Feeds an event to the controller and runs the requests it issues.
    fn dispatch(&mut self, event: Event) -> Task<Message> {
        let commands = self.controller.update(event);
        self.sync_body();
        self.run(commands)
    }

    /// Refills the body editor when the draft was reset or pre-filled.
    fn sync_body(&mut self) {
        let revision = self.controller.draft_revision();
        if revision != self.body_revision {
            self.body = text_editor::Content::with_text(&self.controller.draft().body);
            self.body_revision = revision;
        }
    }

    fn run(&self, commands: Vec<Command>) -> Task<Message> {
        let Some(api) = &self.api else {
            if !commands.is_empty() {
                warn!("No backend configured, dropping {} requests", commands.len());
            }
            return Task::none();
        };

        Task::batch(commands.into_iter().map(|command| {
            let api = Arc::clone(api);
            Task::perform(
                async move { command.run(api.as_ref()).await },
                Message::Core,
            )
        }))
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let panel: Element<'_, Message> = match self.controller.screen() {
            Screen::Mailbox(mailbox) => view::view_mailbox(mailbox),
            Screen::Compose => view::view_compose(self.controller.draft(), &self.body),
            Screen::Detail(detail) => view::view_detail(detail),
        };

        let page: Element<'_, Message> = column![
            view::view_nav(self.settings.theme),
            panel
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        match self.controller.alert() {
            Some(alert) => view::with_alert(page, alert),
            None => page,
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(Message::Keyboard)
    }
}

/// Maps a key press to an event, if it is a shortcut in the current state.
fn shortcut(key: &Key, modifiers: Modifiers, panel: Panel, alert_open: bool) -> Option<Event> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // Escape: close the alert
        Key::Named(keyboard::key::Named::Escape) if alert_open => Some(Event::DismissAlert),
        // The panel under an alert takes no input
        _ if alert_open => None,
        // Ctrl+N: compose new message
        Key::Character(c) if ctrl && c.as_str() == "n" => Some(Event::ComposeNew),
        // Ctrl+Enter: send (in compose view)
        Key::Named(keyboard::key::Named::Enter) if ctrl && panel == Panel::Compose => {
            Some(Event::Send)
        }
        _ => None,
    }
}

/// Builds the backend client, falling back to the default server when the
/// configured one is unusable.
fn connect(settings: &Settings) -> Option<HttpApi> {
    let configured = settings
        .validate()
        .and_then(|()| HttpApi::new(settings.server()));

    match configured {
        Ok(api) => Some(api),
        Err(e) => {
            warn!("Invalid server {}: {}", settings.server(), e);
            HttpApi::new(DEFAULT_SERVER)
                .inspect_err(|e| warn!("Default server unusable: {}", e))
                .ok()
        }
    }
}

/// Load application settings from file.
async fn load_settings() -> Result<Settings, String> {
    Settings::load().await.map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: Settings) -> Result<(), String> {
    settings.save().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_only_dismisses_open_alert() {
        let escape = Key::Named(keyboard::key::Named::Escape);
        assert_eq!(
            shortcut(&escape, Modifiers::empty(), Panel::Compose, true),
            Some(Event::DismissAlert)
        );
        assert_eq!(
            shortcut(&escape, Modifiers::empty(), Panel::Compose, false),
            None
        );
    }

    #[test]
    fn test_ctrl_n_composes() {
        let n = Key::Character("n".into());
        assert_eq!(
            shortcut(&n, Modifiers::COMMAND, Panel::Detail, false),
            Some(Event::ComposeNew)
        );
        assert_eq!(shortcut(&n, Modifiers::empty(), Panel::Detail, false), None);
    }

    #[test]
    fn test_ctrl_enter_sends_only_from_compose() {
        let enter = Key::Named(keyboard::key::Named::Enter);
        assert_eq!(
            shortcut(&enter, Modifiers::COMMAND, Panel::Compose, false),
            Some(Event::Send)
        );
        assert_eq!(
            shortcut(&enter, Modifiers::COMMAND, Panel::MailboxList, false),
            None
        );
    }

    #[test]
    fn test_connect_falls_back_to_default_server() {
        let mut settings = Settings::default();
        settings.server_url = "ftp://example.com/".into();
        let api = connect(&settings).unwrap();
        assert_eq!(api.base().as_str(), DEFAULT_SERVER);
    }

    #[test]
    fn test_connect_uses_session_override() {
        let mut settings = Settings::default();
        settings.apply_override(Some("http://10.0.0.9:9000/".into()));
        let api = connect(&settings).unwrap();
        assert_eq!(api.base().as_str(), "http://10.0.0.9:9000/");
    }

    #[test]
    fn test_shortcuts_blocked_while_alert_open() {
        let n = Key::Character("n".into());
        let enter = Key::Named(keyboard::key::Named::Enter);
        assert_eq!(shortcut(&n, Modifiers::COMMAND, Panel::Compose, true), None);
        assert_eq!(
            shortcut(&enter, Modifiers::COMMAND, Panel::Compose, true),
            None
        );
    }

    #[test]
    fn test_body_editor_follows_reply_draft() {
        let mut app = Mailfront::default();
        let email = mailfront_core::Email {
            id: mailfront_core::EmailId(1),
            sender: "alice@example.com".into(),
            recipients: vec!["me@example.com".into()],
            subject: "Hello".into(),
            body: "Hi".into(),
            timestamp: "Jan 08 2026, 10:30 AM".into(),
            read: true,
            archived: false,
        };

        let _ = app.update(Message::Core(Event::Reply(email)));

        assert_eq!(app.controller.panel(), Panel::Compose);
        assert_eq!(app.body.text().trim_end(), app.controller.draft().body);
    }
}
