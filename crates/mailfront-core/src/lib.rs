//! # mailfront-core
//!
//! Core logic for the `mailfront` webmail client.
//!
//! This crate provides:
//! - Domain models for mailboxes, email summaries and full emails
//! - The [`MailApi`] trait and its HTTP implementation, [`HttpApi`]
//! - Compose and reply drafting
//! - The [`Controller`] state machine that decides which panel is visible
//!   and which backend requests to issue
//! - Persisted [`Settings`]
//!
//! The controller never performs I/O itself. [`Controller::update`] turns an
//! [`Event`] into a list of [`Command`]s, and each command reports its
//! completion as another event:
//!
//! ```ignore
//! use mailfront_core::{Controller, Event, HttpApi, Mailbox};
//!
//! let api = HttpApi::new("http://127.0.0.1:8000/")?;
//! let mut controller = Controller::new();
//!
//! let mut pending = controller.update(Event::OpenMailbox(Mailbox::inbox()));
//! while let Some(command) = pending.pop() {
//!     let event = command.run(&api).await;
//!     pending.extend(controller.update(event));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod compose;
pub mod controller;
mod error;
pub mod model;
pub mod settings;

pub use api::{HttpApi, MailApi, RequestError};
pub use compose::{Draft, DraftField};
pub use controller::{Command, Controller, DetailView, Event, MailboxView, Panel, Screen, Ticket};
pub use error::{Error, Result};
pub use model::{DetailAction, Email, EmailId, EmailSummary, FlagUpdate, Mailbox, RowTone};
pub use settings::{Settings, ThemeChoice};
