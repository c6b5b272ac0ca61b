//! Verification email delivery.
//!
//! The core never waits on delivery: sends are fire-and-forget from its
//! perspective. They do, however, return a `Result`, so the HTTP boundary
//! can log failures instead of losing them silently.

pub mod error;
pub mod mailer;

pub use error::NotifyError;
pub use mailer::{DisabledMailer, HttpMailer, MailerConfig, Notifier};
