//! Mail error types.

use thiserror::Error;

/// Errors raised while building or sending a notification email.
#[derive(Debug, Error)]
pub enum MailError {
    /// A configured or submitted address failed to parse.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("message build error: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP transport failed to deliver the message.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

impl MailError {
    /// Whether the failure is a bad address in the submitted form, as
    /// opposed to a delivery problem on our side.
    #[must_use]
    pub const fn is_address(&self) -> bool {
        matches!(self, Self::Address(_))
    }
}
