//! Compose and reply drafts.

use serde::Serialize;

use crate::model::Email;

/// Prefix added to reply subjects.
const REPLY_PREFIX: &str = "Re: ";

/// Editable fields of the compose form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Comma separated recipient addresses.
    Recipients,
    /// Subject line.
    Subject,
    /// Message body.
    Body,
}

/// Contents of the compose form. Serializes as the `POST /emails` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    /// Comma separated recipient addresses, as typed.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl Draft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft replying to `email`.
    #[must_use]
    pub fn reply(email: &Email) -> Self {
        Self {
            recipients: email.sender.clone(),
            subject: reply_subject(&email.subject),
            body: format!(
                "{}\n\n{}",
                quote_header(&email.timestamp, &email.sender),
                indent_lines(&email.body)
            ),
        }
    }

    /// Replaces one field.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Recipients => self.recipients = value,
            DraftField::Subject => self.subject = value,
            DraftField::Body => self.body = value,
        }
    }

    /// Reads one field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Recipients => &self.recipients,
            DraftField::Subject => &self.subject,
            DraftField::Body => &self.body,
        }
    }

    /// Whether all three fields are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty() && self.subject.is_empty() && self.body.is_empty()
    }
}

/// Subject for a reply. The check is the literal, case-sensitive `"Re:"`.
#[must_use]
pub fn reply_subject(subject: &str) -> String {
    if subject.starts_with("Re:") {
        subject.to_string()
    } else {
        format!("{REPLY_PREFIX}{subject}")
    }
}

/// First line of a quoted reply.
#[must_use]
pub fn quote_header(timestamp: &str, sender: &str) -> String {
    format!("------ On {timestamp} {sender} wrote:")
}

/// Prefixes every line of `text` with a tab, including empty ones.
#[must_use]
pub fn indent_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("\t{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
