//! Capture event wire shape.

use serde::Serialize;

/// One capture call, shaped for the provider's `/capture/` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureEvent {
    /// Project API key.
    pub api_key: String,
    /// Event name.
    pub event: String,
    /// Anonymous id correlating events from one page view.
    pub distinct_id: String,
    /// Free-form event properties.
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl CaptureEvent {
    /// Build a capture event.
    pub fn new(
        api_key: impl Into<String>,
        event: impl Into<String>,
        distinct_id: impl Into<String>,
        properties: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            event: event.into(),
            distinct_id: distinct_id.into(),
            properties,
        }
    }
}
