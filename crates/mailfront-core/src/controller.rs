//! View state machine.
//!
//! The controller owns which panel is visible, the compose draft and the
//! pending alert. It reacts to [`Event`]s (user interaction or completed
//! requests) and answers with [`Command`]s (requests to issue). Running a
//! command yields the event that reports its completion, so the whole
//! application is a single-threaded loop of `update` → `run` → `update`.
//!
//! ```text
//!              nav click                       compose
//!   any ────────────────▶ MailboxList(name) ────────────▶ Compose
//!                            │      ▲                      │  ▲
//!                   row click│      │ archive toggle       │  │ send error
//!                            ▼      │ / send ok (sent)     ▼  │
//!                     Detail(id, origin) ──── reply ────▶ Compose
//! ```
//!
//! Every navigation issues a fresh [`Ticket`]. Completion events carry the
//! ticket of the navigation that caused them, and the controller drops the
//! ones that no longer match so a slow response cannot overwrite a panel
//! the user has already left.

use tracing::{debug, info, warn};

use crate::api::{MailApi, RequestError};
use crate::compose::{Draft, DraftField};
use crate::model::{Email, EmailId, EmailSummary, FlagUpdate, Mailbox};

/// Alert shown when the backend cannot return a requested email.
pub const EMAIL_MISSING_ALERT: &str = "The email you requested doesn't exist!";

/// Alert shown when the backend refuses to send a draft.
pub const SEND_FAILED_ALERT: &str = "You must select at least 1 valid recipient!";

/// Identifies the navigation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// The three mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Mailbox listing.
    MailboxList,
    /// Compose form.
    Compose,
    /// Single email.
    Detail,
}

/// Contents of the mailbox listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxView {
    /// Mailbox being listed.
    pub mailbox: Mailbox,
    /// Summaries in backend order; empty until the listing arrives.
    pub emails: Vec<EmailSummary>,
}

/// Contents of the single-email panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Email being shown.
    pub id: EmailId,
    /// Mailbox the email was opened from.
    pub origin: Mailbox,
    /// Full email; `None` until it arrives.
    pub email: Option<Email>,
}

/// What is currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A mailbox listing.
    Mailbox(MailboxView),
    /// The compose form; its contents live in [`Controller::draft`].
    Compose,
    /// A single email.
    Detail(DetailView),
}

impl Screen {
    /// The visible panel.
    #[must_use]
    pub const fn panel(&self) -> Panel {
        match self {
            Self::Mailbox(_) => Panel::MailboxList,
            Self::Compose => Panel::Compose,
            Self::Detail(_) => Panel::Detail,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Navigation
    /// Show a mailbox listing.
    OpenMailbox(Mailbox),
    /// Start an empty draft.
    ComposeNew,
    /// Open an email from a mailbox listing.
    OpenEmail {
        /// Email to open.
        id: EmailId,
        /// Mailbox whose row was clicked.
        origin: Mailbox,
    },

    // Detail actions
    /// Reply to the email being shown.
    Reply(Email),
    /// Flip the archived flag of an email.
    ToggleArchive {
        /// Email to update.
        id: EmailId,
        /// Archived flag as currently displayed.
        archived: bool,
    },

    // Compose
    /// A compose field was edited.
    DraftEdited(DraftField, String),
    /// Submit the draft.
    Send,
    /// Close the alert.
    DismissAlert,

    // Completions
    /// A mailbox listing arrived.
    MailboxLoaded {
        /// Ticket of the navigation that asked for it.
        ticket: Ticket,
        /// Listing or failure.
        result: Result<Vec<EmailSummary>, RequestError>,
    },
    /// A full email arrived.
    EmailLoaded {
        /// Ticket of the navigation that asked for it.
        ticket: Ticket,
        /// Email or failure.
        result: Result<Email, RequestError>,
    },
    /// The mark-as-read mutation finished.
    ReadMarked {
        /// Email that was marked.
        id: EmailId,
        /// Outcome.
        result: Result<(), RequestError>,
    },
    /// The archive mutation finished.
    ArchiveSet {
        /// Ticket issued with the toggle.
        ticket: Ticket,
        /// Email that was updated.
        id: EmailId,
        /// Outcome.
        result: Result<(), RequestError>,
    },
    /// The send request finished.
    Sent {
        /// Ticket issued with the send.
        ticket: Ticket,
        /// Outcome.
        result: Result<(), RequestError>,
    },
}

/// Backend requests issued by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `GET /emails/{mailbox}`.
    FetchMailbox {
        /// Ticket to report back.
        ticket: Ticket,
        /// Mailbox to list.
        mailbox: Mailbox,
    },
    /// `GET /emails/{id}`.
    FetchEmail {
        /// Ticket to report back.
        ticket: Ticket,
        /// Email to fetch.
        id: EmailId,
    },
    /// `PUT /emails/{id}` with `read: true`.
    MarkRead {
        /// Email to mark.
        id: EmailId,
    },
    /// `PUT /emails/{id}` with the negated archived flag.
    SetArchived {
        /// Ticket to report back.
        ticket: Ticket,
        /// Email to update.
        id: EmailId,
        /// Archived flag before the update.
        current: bool,
    },
    /// `POST /emails`.
    Send {
        /// Ticket to report back.
        ticket: Ticket,
        /// Draft to send.
        draft: Draft,
    },
}

impl Command {
    /// Performs the request and reports its completion.
    pub async fn run<A: MailApi>(self, api: &A) -> Event {
        match self {
            Self::FetchMailbox { ticket, mailbox } => Event::MailboxLoaded {
                ticket,
                result: api.list_mailbox(&mailbox).await.map_err(Into::into),
            },
            Self::FetchEmail { ticket, id } => Event::EmailLoaded {
                ticket,
                result: api.get_email(id).await.map_err(Into::into),
            },
            Self::MarkRead { id } => Event::ReadMarked {
                id,
                result: api
                    .update_email(id, FlagUpdate::mark_read())
                    .await
                    .map_err(Into::into),
            },
            Self::SetArchived {
                ticket,
                id,
                current,
            } => Event::ArchiveSet {
                ticket,
                id,
                result: api
                    .update_email(id, FlagUpdate::flip_archived(current))
                    .await
                    .map_err(Into::into),
            },
            Self::Send { ticket, draft } => Event::Sent {
                ticket,
                result: api.send_email(&draft).await.map_err(Into::into),
            },
        }
    }
}

/// The view state machine.
#[derive(Debug, Clone)]
pub struct Controller {
    /// What is on screen.
    screen: Screen,
    /// Compose form contents.
    draft: Draft,
    /// Bumped whenever the draft is replaced wholesale (not on edits).
    draft_revision: u64,
    /// Pending alert text.
    alert: Option<String>,
    /// Ticket of the latest navigation or mutation.
    ticket: Ticket,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Creates a controller showing an empty inbox listing.
    ///
    /// Dispatch [`Event::OpenMailbox`] with the inbox to fill it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Mailbox(MailboxView {
                mailbox: Mailbox::inbox(),
                emails: Vec::new(),
            }),
            draft: Draft::new(),
            draft_revision: 0,
            alert: None,
            ticket: Ticket::default(),
        }
    }

    /// What is on screen.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The visible panel.
    #[must_use]
    pub const fn panel(&self) -> Panel {
        self.screen.panel()
    }

    /// Compose form contents.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Changes whenever the draft is reset or pre-filled.
    ///
    /// Editors holding their own copy of the body resynchronise when this
    /// moves.
    #[must_use]
    pub const fn draft_revision(&self) -> u64 {
        self.draft_revision
    }

    /// Alert waiting to be acknowledged.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Ticket of the latest navigation or mutation.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Applies an event and returns the requests to issue.
    #[must_use]
    pub fn update(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::OpenMailbox(mailbox) => self.load_mailbox(mailbox),
            Event::ComposeNew => {
                self.compose_new();
                Vec::new()
            }
            Event::OpenEmail { id, origin } => self.open_email(id, origin),
            Event::Reply(email) => {
                self.reply_to(&email);
                Vec::new()
            }
            Event::ToggleArchive { id, archived } => self.flip_archive_status(id, archived),
            Event::DraftEdited(field, value) => {
                self.draft.set(field, value);
                Vec::new()
            }
            Event::Send => {
                if self.panel() == Panel::Compose {
                    self.send_email()
                } else {
                    Vec::new()
                }
            }
            Event::DismissAlert => {
                self.alert = None;
                Vec::new()
            }
            Event::MailboxLoaded { ticket, result } => self.mailbox_loaded(ticket, result),
            Event::EmailLoaded { ticket, result } => self.email_loaded(ticket, result),
            Event::ReadMarked { id, result } => {
                match result {
                    Ok(()) => debug!("Marked email {} as read", id),
                    Err(e) => warn!("Failed to mark email {} as read: {}", id, e),
                }
                Vec::new()
            }
            Event::ArchiveSet { ticket, id, result } => self.archive_set(ticket, id, result),
            Event::Sent { ticket, result } => self.sent(ticket, result),
        }
    }

    // ── View switching ───────────────────────────────────────────────────

    /// Shows an empty listing for `mailbox`.
    pub fn show_mailbox(&mut self, mailbox: Mailbox) {
        self.navigate(Screen::Mailbox(MailboxView {
            mailbox,
            emails: Vec::new(),
        }));
    }

    /// Shows the compose form with an empty draft.
    pub fn show_compose(&mut self) {
        self.navigate(Screen::Compose);
        self.draft = Draft::new();
        self.draft_revision += 1;
    }

    /// Shows an empty single-email panel for `id`.
    pub fn show_detail(&mut self, id: EmailId, origin: Mailbox) {
        self.navigate(Screen::Detail(DetailView {
            id,
            origin,
            email: None,
        }));
    }

    fn navigate(&mut self, screen: Screen) {
        self.ticket = self.ticket.next();
        debug!("Showing {:?} panel", screen.panel());
        self.screen = screen;
    }

    // ── Mailbox listing ──────────────────────────────────────────────────

    /// Switches to `mailbox` and requests its summaries.
    pub fn load_mailbox(&mut self, mailbox: Mailbox) -> Vec<Command> {
        self.show_mailbox(mailbox.clone());
        vec![Command::FetchMailbox {
            ticket: self.ticket,
            mailbox,
        }]
    }

    fn mailbox_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<EmailSummary>, RequestError>,
    ) -> Vec<Command> {
        if ticket != self.ticket {
            debug!("Dropping stale mailbox listing");
            return Vec::new();
        }

        match result {
            Ok(emails) => {
                if let Screen::Mailbox(view) = &mut self.screen {
                    info!("Loaded {} emails from {}", emails.len(), view.mailbox);
                    view.emails = emails;
                }
            }
            Err(e) => warn!("Failed to load mailbox: {}", e),
        }
        Vec::new()
    }

    // ── Compose ──────────────────────────────────────────────────────────

    /// Opens an empty draft.
    pub fn compose_new(&mut self) {
        self.show_compose();
    }

    /// Opens a draft replying to `email`.
    pub fn reply_to(&mut self, email: &Email) {
        self.show_compose();
        self.draft = Draft::reply(email);
    }

    /// Submits the current draft.
    pub fn send_email(&mut self) -> Vec<Command> {
        self.ticket = self.ticket.next();
        vec![Command::Send {
            ticket: self.ticket,
            draft: self.draft.clone(),
        }]
    }

    fn sent(&mut self, ticket: Ticket, result: Result<(), RequestError>) -> Vec<Command> {
        match result {
            Ok(()) if ticket == self.ticket => {
                info!("Email sent");
                self.load_mailbox(Mailbox::sent())
            }
            Ok(()) => {
                info!("Email sent after navigating away");
                Vec::new()
            }
            Err(RequestError::Rejected(message)) => {
                self.alert = Some(format!("{SEND_FAILED_ALERT}\n{message}"));
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to send email: {}", e);
                Vec::new()
            }
        }
    }

    // ── Single email ─────────────────────────────────────────────────────

    /// Switches to the single-email panel and requests the email.
    pub fn open_email(&mut self, id: EmailId, origin: Mailbox) -> Vec<Command> {
        self.show_detail(id, origin);
        vec![Command::FetchEmail {
            ticket: self.ticket,
            id,
        }]
    }

    fn email_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Email, RequestError>,
    ) -> Vec<Command> {
        if ticket != self.ticket {
            debug!("Dropping stale email");
            return Vec::new();
        }

        match result {
            Ok(email) => {
                let commands = vec![Command::MarkRead { id: email.id }];
                if let Screen::Detail(view) = &mut self.screen {
                    view.email = Some(email);
                }
                commands
            }
            Err(RequestError::Rejected(message)) => {
                self.alert = Some(format!("{EMAIL_MISSING_ALERT}\n{message}"));
                self.load_mailbox(Mailbox::inbox())
            }
            Err(e) => {
                warn!("Failed to load email: {}", e);
                Vec::new()
            }
        }
    }

    /// Requests the archived flag of `id` be set to `!current`.
    pub fn flip_archive_status(&mut self, id: EmailId, current: bool) -> Vec<Command> {
        self.ticket = self.ticket.next();
        vec![Command::SetArchived {
            ticket: self.ticket,
            id,
            current,
        }]
    }

    fn archive_set(
        &mut self,
        ticket: Ticket,
        id: EmailId,
        result: Result<(), RequestError>,
    ) -> Vec<Command> {
        match result {
            Ok(()) if ticket == self.ticket => {
                debug!("Archive flag of email {} flipped", id);
                self.load_mailbox(Mailbox::inbox())
            }
            Ok(()) => {
                debug!("Archive flag of email {} flipped after navigating away", id);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to update archive flag of email {}: {}", id, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: u64, archived: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: "alice@example.com".into(),
            recipients: vec!["me@example.com".into()],
            subject: "Hello".into(),
            body: "Hi there".into(),
            timestamp: "Jan 08 2026, 10:30 AM".into(),
            read: false,
            archived,
        }
    }

    fn summary(id: u64, read: bool) -> EmailSummary {
        EmailSummary {
            id: EmailId(id),
            sender: "alice@example.com".into(),
            subject: "Hello".into(),
            timestamp: "Jan 08 2026, 10:30 AM".into(),
            read,
            archived: false,
        }
    }

    #[test]
    fn test_starts_on_inbox() {
        let controller = Controller::new();
        assert_eq!(controller.panel(), Panel::MailboxList);
        match controller.screen() {
            Screen::Mailbox(view) => assert!(view.mailbox.is_inbox()),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_open_mailbox_requests_listing() {
        let mut controller = Controller::new();
        let commands = controller.update(Event::OpenMailbox(Mailbox::sent()));

        assert_eq!(controller.panel(), Panel::MailboxList);
        assert_eq!(
            commands,
            vec![Command::FetchMailbox {
                ticket: controller.ticket(),
                mailbox: Mailbox::sent(),
            }]
        );
    }

    #[test]
    fn test_listing_keeps_backend_order() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::OpenMailbox(Mailbox::inbox()));
        let ticket = controller.ticket();

        let _ = controller.update(Event::MailboxLoaded {
            ticket,
            result: Ok(vec![summary(3, false), summary(1, true), summary(2, false)]),
        });

        let Screen::Mailbox(view) = controller.screen() else {
            panic!("expected mailbox listing");
        };
        let ids: Vec<u64> = view.emails.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_stale_listing_is_dropped() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::OpenMailbox(Mailbox::inbox()));
        let stale = controller.ticket();
        let _ = controller.update(Event::OpenMailbox(Mailbox::sent()));

        let _ = controller.update(Event::MailboxLoaded {
            ticket: stale,
            result: Ok(vec![summary(1, false)]),
        });

        let Screen::Mailbox(view) = controller.screen() else {
            panic!("expected mailbox listing");
        };
        assert_eq!(view.mailbox, Mailbox::sent());
        assert!(view.emails.is_empty());
    }

    #[test]
    fn test_failed_listing_leaves_panel_empty() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::OpenMailbox(Mailbox::inbox()));
        let ticket = controller.ticket();

        let commands = controller.update(Event::MailboxLoaded {
            ticket,
            result: Err(RequestError::Transport("connection refused".into())),
        });

        assert!(commands.is_empty());
        assert!(controller.alert().is_none());
        assert_eq!(controller.panel(), Panel::MailboxList);
    }

    #[test]
    fn test_compose_clears_draft() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::ComposeNew);
        let _ = controller.update(Event::DraftEdited(DraftField::Recipients, "x@y.z".into()));
        let _ = controller.update(Event::DraftEdited(DraftField::Subject, "s".into()));
        let _ = controller.update(Event::DraftEdited(DraftField::Body, "b".into()));
        let revision = controller.draft_revision();

        let _ = controller.update(Event::ComposeNew);

        assert_eq!(controller.panel(), Panel::Compose);
        assert!(controller.draft().is_empty());
        assert!(controller.draft_revision() > revision);
    }

    #[test]
    fn test_open_email_shows_detail_and_fetches() {
        let mut controller = Controller::new();
        let commands = controller.update(Event::OpenEmail {
            id: EmailId(5),
            origin: Mailbox::inbox(),
        });

        assert_eq!(controller.panel(), Panel::Detail);
        assert_eq!(
            commands,
            vec![Command::FetchEmail {
                ticket: controller.ticket(),
                id: EmailId(5),
            }]
        );
    }

    #[test]
    fn test_loaded_email_is_marked_read_once() {
        for read in [false, true] {
            let mut controller = Controller::new();
            let _ = controller.update(Event::OpenEmail {
                id: EmailId(5),
                origin: Mailbox::inbox(),
            });
            let mut loaded = email(5, false);
            loaded.read = read;

            let commands = controller.update(Event::EmailLoaded {
                ticket: controller.ticket(),
                result: Ok(loaded.clone()),
            });

            assert_eq!(commands, vec![Command::MarkRead { id: EmailId(5) }]);
            let Screen::Detail(view) = controller.screen() else {
                panic!("expected detail");
            };
            assert_eq!(view.email.as_ref(), Some(&loaded));
        }
    }

    #[test]
    fn test_missing_email_alerts_and_falls_back_to_inbox() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::OpenEmail {
            id: EmailId(99),
            origin: Mailbox::sent(),
        });

        let commands = controller.update(Event::EmailLoaded {
            ticket: controller.ticket(),
            result: Err(RequestError::Rejected("Email not found.".into())),
        });

        assert_eq!(
            controller.alert(),
            Some("The email you requested doesn't exist!\nEmail not found.")
        );
        assert_eq!(
            commands,
            vec![Command::FetchMailbox {
                ticket: controller.ticket(),
                mailbox: Mailbox::inbox(),
            }]
        );
        assert_eq!(controller.panel(), Panel::MailboxList);
    }

    #[test]
    fn test_reply_prefills_draft() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::Reply(email(1, false)));

        assert_eq!(controller.panel(), Panel::Compose);
        assert_eq!(controller.draft().recipients, "alice@example.com");
        assert_eq!(controller.draft().subject, "Re: Hello");
        assert!(controller.draft().body.ends_with("\tHi there"));
    }

    #[test]
    fn test_send_rejection_keeps_compose_open() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::ComposeNew);
        let commands = controller.update(Event::Send);
        let [Command::Send { ticket, .. }] = commands.as_slice() else {
            panic!("expected a send command, got {commands:?}");
        };

        let commands = controller.update(Event::Sent {
            ticket: *ticket,
            result: Err(RequestError::Rejected("no valid recipients".into())),
        });

        assert!(commands.is_empty());
        assert_eq!(controller.panel(), Panel::Compose);
        assert!(controller.alert().is_some_and(|a| a.contains("no valid recipients")));

        let _ = controller.update(Event::DismissAlert);
        assert!(controller.alert().is_none());
    }

    #[test]
    fn test_send_success_opens_sent_mailbox() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::ComposeNew);
        let _ = controller.update(Event::Send);

        let commands = controller.update(Event::Sent {
            ticket: controller.ticket(),
            result: Ok(()),
        });

        assert_eq!(
            commands,
            vec![Command::FetchMailbox {
                ticket: controller.ticket(),
                mailbox: Mailbox::sent(),
            }]
        );
    }

    #[test]
    fn test_send_ignored_outside_compose() {
        let mut controller = Controller::new();
        assert!(controller.update(Event::Send).is_empty());
    }

    #[test]
    fn test_late_send_success_does_not_navigate() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::ComposeNew);
        let _ = controller.update(Event::Send);
        let ticket = controller.ticket();
        let _ = controller.update(Event::OpenMailbox(Mailbox::archive()));

        let commands = controller.update(Event::Sent {
            ticket,
            result: Ok(()),
        });

        assert!(commands.is_empty());
        let Screen::Mailbox(view) = controller.screen() else {
            panic!("expected mailbox listing");
        };
        assert_eq!(view.mailbox, Mailbox::archive());
    }

    #[test]
    fn test_late_send_rejection_still_alerts() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::ComposeNew);
        let _ = controller.update(Event::Send);
        let ticket = controller.ticket();
        let _ = controller.update(Event::OpenMailbox(Mailbox::inbox()));

        let _ = controller.update(Event::Sent {
            ticket,
            result: Err(RequestError::Rejected("no valid recipients".into())),
        });

        assert!(controller.alert().is_some());
    }

    #[test]
    fn test_archive_toggle_reloads_inbox() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::OpenEmail {
            id: EmailId(4),
            origin: Mailbox::archive(),
        });

        let commands = controller.update(Event::ToggleArchive {
            id: EmailId(4),
            archived: true,
        });
        assert_eq!(
            commands,
            vec![Command::SetArchived {
                ticket: controller.ticket(),
                id: EmailId(4),
                current: true,
            }]
        );

        let commands = controller.update(Event::ArchiveSet {
            ticket: controller.ticket(),
            id: EmailId(4),
            result: Ok(()),
        });
        assert_eq!(
            commands,
            vec![Command::FetchMailbox {
                ticket: controller.ticket(),
                mailbox: Mailbox::inbox(),
            }]
        );
    }

    #[test]
    fn test_failed_archive_toggle_stays_put() {
        let mut controller = Controller::new();
        let _ = controller.update(Event::OpenEmail {
            id: EmailId(4),
            origin: Mailbox::inbox(),
        });
        let _ = controller.update(Event::ToggleArchive {
            id: EmailId(4),
            archived: false,
        });

        let commands = controller.update(Event::ArchiveSet {
            ticket: controller.ticket(),
            id: EmailId(4),
            result: Err(RequestError::Transport("timeout".into())),
        });

        assert!(commands.is_empty());
        assert_eq!(controller.panel(), Panel::Detail);
    }
}
