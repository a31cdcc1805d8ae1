//! Mail data models exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an email, assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named mailbox exposed by the backend.
///
/// The set of valid names belongs to the backend; the three well-known
/// mailboxes have constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mailbox(String);

impl Mailbox {
    /// Name of the inbox.
    pub const INBOX: &'static str = "inbox";
    /// Name of the sent mailbox.
    pub const SENT: &'static str = "sent";
    /// Name of the archive mailbox.
    pub const ARCHIVE: &'static str = "archive";

    /// Creates a mailbox reference from its backend name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The inbox.
    #[must_use]
    pub fn inbox() -> Self {
        Self::new(Self::INBOX)
    }

    /// Mail sent by the user.
    #[must_use]
    pub fn sent() -> Self {
        Self::new(Self::SENT)
    }

    /// Archived mail.
    #[must_use]
    pub fn archive() -> Self {
        Self::new(Self::ARCHIVE)
    }

    /// Returns the backend name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the inbox.
    #[must_use]
    pub fn is_inbox(&self) -> bool {
        self.0 == Self::INBOX
    }

    /// Heading shown above the mailbox listing: the name with its first
    /// character upper-cased.
    #[must_use]
    pub fn heading(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Mailbox {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Abbreviated email as returned by a mailbox listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailSummary {
    /// Backend identifier.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Timestamp, preformatted by the backend.
    pub timestamp: String,
    /// Whether the email has been read.
    pub read: bool,
    /// Whether the email is archived.
    pub archived: bool,
}

/// Background used for a row in the mailbox listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    /// Read mail is dimmed.
    Muted,
    /// Unread mail stands out.
    Neutral,
}

impl EmailSummary {
    /// Row background for this summary.
    #[must_use]
    pub const fn tone(&self) -> RowTone {
        if self.read {
            RowTone::Muted
        } else {
            RowTone::Neutral
        }
    }
}

/// A full email as returned by `GET /emails/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Email {
    /// Backend identifier.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Recipient addresses.
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// Timestamp, preformatted by the backend.
    pub timestamp: String,
    /// Whether the email has been read.
    pub read: bool,
    /// Whether the email is archived.
    pub archived: bool,
}

/// Buttons offered in the single-email view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Start a reply.
    Reply,
    /// Move the email to the archive.
    Archive,
    /// Move the email back to the inbox.
    Unarchive,
}

impl DetailAction {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reply => "Reply",
            Self::Archive => "Archive",
            Self::Unarchive => "Unarchive",
        }
    }
}

impl Email {
    /// Buttons to show for this email when it was opened from `origin`.
    ///
    /// Reply is always offered. Archive only appears for unarchived mail
    /// opened from the inbox; Unarchive appears for any archived mail.
    #[must_use]
    pub fn actions(&self, origin: &Mailbox) -> Vec<DetailAction> {
        let mut actions = vec![DetailAction::Reply];
        if origin.is_inbox() && !self.archived {
            actions.push(DetailAction::Archive);
        }
        if self.archived {
            actions.push(DetailAction::Unarchive);
        }
        actions
    }

    /// Recipients joined for display.
    #[must_use]
    pub fn recipients_display(&self) -> String {
        self.recipients.join(", ")
    }
}

/// Partial flag update sent with `PUT /emails/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FlagUpdate {
    /// New read flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    /// New archived flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl FlagUpdate {
    /// Marks an email as read.
    #[must_use]
    pub const fn mark_read() -> Self {
        Self {
            read: Some(true),
            archived: None,
        }
    }

    /// Sets the archived flag to the negation of `current`.
    #[must_use]
    pub const fn flip_archived(current: bool) -> Self {
        Self {
            read: None,
            archived: Some(!current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(archived: bool) -> Email {
        Email {
            id: EmailId(7),
            sender: "alice@example.com".into(),
            recipients: vec!["bob@example.com".into(), "carol@example.com".into()],
            subject: "Hello".into(),
            body: "Hi Bob".into(),
            timestamp: "Jan 08 2026, 10:30 AM".into(),
            read: false,
            archived,
        }
    }

    #[test]
    fn test_heading_capitalizes_first_letter() {
        assert_eq!(Mailbox::inbox().heading(), "Inbox");
        assert_eq!(Mailbox::archive().heading(), "Archive");
        assert_eq!(Mailbox::new("").heading(), "");
    }

    #[test]
    fn test_row_tone_follows_read_flag() {
        let mut summary = EmailSummary {
            id: EmailId(1),
            sender: "a@example.com".into(),
            subject: "s".into(),
            timestamp: "t".into(),
            read: false,
            archived: false,
        };
        assert_eq!(summary.tone(), RowTone::Neutral);
        summary.read = true;
        assert_eq!(summary.tone(), RowTone::Muted);
    }

    #[test]
    fn test_actions_from_inbox() {
        assert_eq!(
            email(false).actions(&Mailbox::inbox()),
            vec![DetailAction::Reply, DetailAction::Archive]
        );
    }

    #[test]
    fn test_actions_from_sent_without_archive() {
        assert_eq!(
            email(false).actions(&Mailbox::sent()),
            vec![DetailAction::Reply]
        );
    }

    #[test]
    fn test_unarchive_offered_regardless_of_origin() {
        for origin in [Mailbox::inbox(), Mailbox::sent(), Mailbox::archive()] {
            assert_eq!(
                email(true).actions(&origin),
                vec![DetailAction::Reply, DetailAction::Unarchive]
            );
        }
    }

    #[test]
    fn test_summary_ignores_extra_fields() {
        let json = r#"{
            "id": 3,
            "sender": "a@example.com",
            "recipients": ["b@example.com"],
            "subject": "Lunch",
            "body": "Noon?",
            "timestamp": "Jan 01 2026, 12:00 PM",
            "read": true,
            "archived": false
        }"#;

        let summary: EmailSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, EmailId(3));
        assert!(summary.read);
    }

    #[test]
    fn test_flag_update_serializes_only_set_fields() {
        let json = serde_json::to_string(&FlagUpdate::mark_read()).unwrap();
        assert_eq!(json, r#"{"read":true}"#);

        let json = serde_json::to_string(&FlagUpdate::flip_archived(false)).unwrap();
        assert_eq!(json, r#"{"archived":true}"#);
    }

    #[test]
    fn test_recipients_display() {
        assert_eq!(
            email(false).recipients_display(),
            "bob@example.com, carol@example.com"
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_flipping_twice_restores_archived(archived: bool) {
            let once = FlagUpdate::flip_archived(archived).archived;
            proptest::prop_assert_eq!(once, Some(!archived));

            let twice = once.map(FlagUpdate::flip_archived).and_then(|u| u.archived);
            proptest::prop_assert_eq!(twice, Some(archived));
        }
    }
}
