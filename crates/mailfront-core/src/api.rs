//! Client for the mail backend's HTTP API.
//!
//! | Operation | Request |
//! |---|---|
//! | List mailbox | `GET /emails/{mailbox}` |
//! | Get email | `GET /emails/{id}` |
//! | Send email | `POST /emails` |
//! | Update flags | `PUT /emails/{id}` |
//!
//! The backend reports logical failures as a JSON object with an `error`
//! field, usually alongside a 4xx status. Bodies are therefore decoded
//! whatever the status code, and an `error` field becomes
//! [`Error::Backend`].

use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::compose::Draft;
use crate::error::{Error, Result};
use crate::model::{Email, EmailId, EmailSummary, FlagUpdate, Mailbox};

/// Operations offered by the mail backend.
///
/// [`HttpApi`] talks to the real server; tests substitute an in-memory
/// implementation.
pub trait MailApi: Send + Sync {
    /// Lists the summaries in `mailbox`, in backend order.
    fn list_mailbox(
        &self,
        mailbox: &Mailbox,
    ) -> impl Future<Output = Result<Vec<EmailSummary>>> + Send;

    /// Fetches one email.
    fn get_email(&self, id: EmailId) -> impl Future<Output = Result<Email>> + Send;

    /// Sends a new email built from `draft`.
    fn send_email(&self, draft: &Draft) -> impl Future<Output = Result<()>> + Send;

    /// Updates the read and/or archived flags of an email.
    fn update_email(
        &self,
        id: EmailId,
        update: FlagUpdate,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Outcome of a failed request, in a form that can travel inside UI events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The backend answered with an `error` field.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a usable answer.
    #[error("{0}")]
    Transport(String),
}

impl From<Error> for RequestError {
    fn from(error: Error) -> Self {
        match error {
            Error::Backend(message) => Self::Rejected(message),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// [`MailApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    /// Server root, e.g. `http://127.0.0.1:8000/`.
    base: Url,
    /// HTTP client.
    http_client: Client,
}

impl HttpApi {
    /// Creates a client for the server rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("{base_url} cannot be used as a base URL")));
        }
        Ok(Self {
            base,
            http_client: Client::new(),
        })
    }

    /// Server root this client talks to.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Builds `{base}/emails/{segment}`, escaping the segment.
    fn emails_url(&self, segment: Option<&str>) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Config(format!("{} cannot be a base URL", self.base)))?;
            segments.pop_if_empty().push("emails");
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }
}

impl MailApi for HttpApi {
    async fn list_mailbox(&self, mailbox: &Mailbox) -> Result<Vec<EmailSummary>> {
        let url = self.emails_url(Some(mailbox.as_str()))?;
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        let body = response.bytes().await?;
        decode_reply(&body)
    }

    async fn get_email(&self, id: EmailId) -> Result<Email> {
        let url = self.emails_url(Some(&id.to_string()))?;
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        let body = response.bytes().await?;
        decode_reply(&body)
    }

    async fn send_email(&self, draft: &Draft) -> Result<()> {
        let url = self.emails_url(None)?;
        tracing::debug!("POST {}", url);

        let response = self.http_client.post(url).json(draft).send().await?;
        let body = response.bytes().await?;
        let _: serde_json::Value = decode_reply(&body)?;
        Ok(())
    }

    async fn update_email(&self, id: EmailId, update: FlagUpdate) -> Result<()> {
        let url = self.emails_url(Some(&id.to_string()))?;
        tracing::debug!("PUT {} {:?}", url, update);

        // The response carries nothing the client acts on.
        self.http_client.put(url).json(&update).send().await?;
        Ok(())
    }
}

/// Decodes a backend reply, turning an `error` field into [`Error::Backend`].
///
/// # Errors
///
/// Returns [`Error::Backend`] when the reply is an object with an `error`
/// field and [`Error::Serde`] when the body is not the expected shape.
pub fn decode_reply<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map_or_else(|| error.to_string(), str::to_string);
        return Err(Error::Backend(message));
    }

    serde_json::from_value(value).map_err(Into::into)
}
