//! Signup form state.

use serde::{Deserialize, Serialize};

/// Phase of the signup form. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignupStatus {
    /// Waiting for input; the form is interactive.
    #[default]
    Idle,
    /// One submission is in flight; re-submission is blocked.
    Loading,
    /// The endpoint accepted the email; the success panel is showing.
    Success,
    /// A guard or the endpoint rejected the attempt; an inline message
    /// is showing.
    Error,
}

impl SignupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupStatus::Idle => "idle",
            SignupStatus::Loading => "loading",
            SignupStatus::Success => "success",
            SignupStatus::Error => "error",
        }
    }

    /// Whether the submit control should be disabled.
    pub fn is_loading(&self) -> bool {
        matches!(self, SignupStatus::Loading)
    }
}

/// Transient form state, held in memory for the lifetime of the page
/// view. Created with defaults on mount, discarded on navigation away.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupState {
    /// User-editable email text. No canonicalization beyond the shape
    /// check at submit time.
    pub email: String,
    /// Current phase.
    pub status: SignupStatus,
    /// Inline message; non-empty only while an error is being surfaced.
    pub error_message: String,
    /// Epoch milliseconds of the most recent submit attempt. Zero until
    /// the first attempt; used solely for the rate-limit comparison.
    pub last_submit_ms: u64,
    /// Hidden honeypot field. Real users never populate it.
    pub honeypot: String,
}
