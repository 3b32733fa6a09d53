//! Request body for the waitlist webhook.

use serde::{Deserialize, Serialize};

/// JSON body posted to the waitlist webhook.
///
/// The `website` field carries the honeypot value; real signups always
/// send it empty, so the receiving side can drop anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitlistPayload {
    /// Signup email, already shape-checked by the workflow.
    pub email: String,
    /// Honeypot field value.
    pub website: String,
}

impl WaitlistPayload {
    /// Create a payload.
    pub fn new(email: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            website: website.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape() {
        let payload = WaitlistPayload::new("janedoe@gmail.com", "");
        let json = serde_json::to_value(&payload).unwrap();

        // Field names are the wire contract; the webhook matches on them.
        assert_eq!(
            json,
            serde_json::json!({ "email": "janedoe@gmail.com", "website": "" })
        );
    }
}
