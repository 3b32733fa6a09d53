//! Signup error taxonomy.

use applywell_webhook::WebhookError;
use thiserror::Error;

/// Ways a submit attempt can fail. Every variant is terminal for the
/// attempt; nothing is retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    /// Resubmission attempted inside the cooldown window.
    #[error("rate limited inside the cooldown window")]
    RateLimited,

    /// Input failed the email shape check.
    #[error("email failed the shape check")]
    InvalidEmail,

    /// Honeypot field was populated; treated as bot traffic.
    #[error("honeypot populated, submission dropped")]
    BotSuspected,

    /// The endpoint answered with a non-200 status.
    #[error("endpoint rejected the submission")]
    ServerRejected,

    /// The call could not complete at the transport level.
    #[error("endpoint unreachable")]
    NetworkUnavailable,
}

impl SignupError {
    /// Inline copy shown under the email field.
    ///
    /// `BotSuspected` surfaces nothing: automated submitters get no
    /// feedback that they were detected. Server-side failures stay
    /// generic, with no status-code detail.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SignupError::RateLimited => Some("Please wait before submitting again."),
            SignupError::InvalidEmail => Some("Please enter a valid email address."),
            SignupError::BotSuspected => None,
            SignupError::ServerRejected => Some("Something went wrong. Please try again."),
            SignupError::NetworkUnavailable => Some("Unable to connect. Please try again later."),
        }
    }
}

impl From<&WebhookError> for SignupError {
    fn from(e: &WebhookError) -> Self {
        match e {
            WebhookError::Rejected { .. } => SignupError::ServerRejected,
            WebhookError::Connection(_) => SignupError::NetworkUnavailable,
        }
    }
}
