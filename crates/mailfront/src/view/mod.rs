//! View components for the application.

mod alert;
mod compose;
mod detail;
mod mailbox;
mod nav;

pub use alert::with_alert;
pub use compose::view_compose;
pub use detail::view_detail;
pub use mailbox::view_mailbox;
pub use nav::view_nav;
