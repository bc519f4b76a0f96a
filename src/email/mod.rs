//! Outbound email: the send capability, the message template, and the
//! Resend-backed implementation.

pub mod resend;
pub mod template;

use async_trait::async_trait;

use crate::core::models::OutboundEmail;
use crate::errors::ContactError;

pub use resend::ResendClient;

/// What the email provider said about one send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Accepted by the provider, with its message id when one was returned.
    Delivered { id: Option<String> },
    /// The provider answered but refused the message; the text is passed
    /// back to the caller as-is.
    Rejected(String),
}

/// Anything able to deliver an [`OutboundEmail`].
///
/// `Ok(SendOutcome::Rejected(_))` is a provider-reported failure; `Err(_)`
/// means the provider could not be reached at all.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SendOutcome, ContactError>;
}
