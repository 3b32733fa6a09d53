//! Webhook client over `reqwest`.

use applywell_config::WebhookConfig;
use async_trait::async_trait;

use crate::payload::WaitlistPayload;

/// Header carrying the shared secret. The value is configuration; the
/// name is part of the wire contract.
pub const WAITLIST_KEY_HEADER: &str = "waitlist-key";

/// Error type for webhook submissions.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The endpoint answered with something other than 200.
    #[error("webhook rejected: status {status}")]
    Rejected { status: u16 },

    /// The call never completed at the transport level.
    #[error("connection error: {0}")]
    Connection(String),
}

/// Seam the signup workflow submits through. Mocked in tests; implemented
/// by [`WebhookClient`] in the browser.
///
/// `?Send` because the browser event loop is single-threaded and wasm
/// futures are not `Send`.
#[async_trait(?Send)]
pub trait WaitlistEndpoint {
    /// Deliver one payload. `Ok(())` means the endpoint answered 200
    /// exactly; every other outcome is an error.
    async fn submit(&self, payload: &WaitlistPayload) -> Result<(), WebhookError>;
}

/// Webhook client for the configured endpoint.
///
/// On wasm32 `reqwest` rides the browser `fetch` API, so the call picks up
/// the transport's own defaults; no explicit timeout or retry is applied.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: String,
    waitlist_key: String,
}

impl WebhookClient {
    /// Create a client from webhook configuration.
    pub fn new(config: &WebhookConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            waitlist_key: config.waitlist_key.clone(),
        }
    }

    /// Endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl WaitlistEndpoint for WebhookClient {
    async fn submit(&self, payload: &WaitlistPayload) -> Result<(), WebhookError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(WAITLIST_KEY_HEADER, &self.waitlist_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| WebhookError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(WebhookError::Rejected { status });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_configured_endpoint() {
        let config = WebhookConfig::new("https://hooks.example.com/waitlist", "wl-key");
        let client = WebhookClient::new(&config);

        assert_eq!(client.endpoint(), "https://hooks.example.com/waitlist");
    }

    #[test]
    fn test_header_name_is_wire_contract() {
        assert_eq!(WAITLIST_KEY_HEADER, "waitlist-key");
    }

    #[test]
    fn test_rejected_error_carries_status() {
        let err = WebhookError::Rejected { status: 503 };

        assert_eq!(err.to_string(), "webhook rejected: status 503");
    }
}
