//! Fire-and-forget analytics capture.
//!
//! The landing site treats analytics as a process-wide collaborator:
//! initialized once at startup from [`AnalyticsConfig`], handed to the UI
//! tree, and consulted opportunistically. Nothing here may affect the
//! correctness of the signup workflow - capture failures are swallowed,
//! and an unconfigured provider degrades to a no-op.
//!
//! The wire shape follows the PostHog capture API: a JSON POST of
//! `{api_key, event, distinct_id, properties}` to `{api_host}/capture/`.

mod event;

pub use event::*;

use applywell_config::AnalyticsConfig;

/// Event emitted once per page view.
pub const EVENT_PAGE_VIEW: &str = "page_view";

/// Event emitted when the waitlist accepts an email.
pub const EVENT_WAITLIST_SIGNUP: &str = "waitlist_signup";

/// Analytics capture client.
///
/// Cheap to clone; safe to drop into Leptos context.
#[derive(Debug, Clone)]
pub struct Analytics {
    http: reqwest::Client,
    config: AnalyticsConfig,
    session_id: String,
}

impl Analytics {
    /// Create a client. A config without key or host yields a client
    /// whose captures are silently discarded.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session_id: session_id(),
        }
    }

    /// A client that never sends anything.
    pub fn disabled() -> Self {
        Self::new(AnalyticsConfig::default())
    }

    /// Whether captures will actually be sent.
    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Anonymous id distinguishing this page view.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Capture an event with no extra properties.
    pub fn capture(&self, event: &str) {
        self.capture_with(event, serde_json::Map::new());
    }

    /// Capture an event, fire-and-forget.
    ///
    /// Returns immediately; the request runs on the browser event loop
    /// and its outcome is ignored. Off wasm32 this is a no-op.
    pub fn capture_with(&self, event: &str, properties: serde_json::Map<String, serde_json::Value>) {
        if !self.is_enabled() {
            return;
        }
        let capture = CaptureEvent::new(&self.config.api_key, event, &self.session_id, properties);
        let request = self
            .http
            .post(capture_url(&self.config.api_host))
            .json(&capture);
        spawn_forget(request);
    }
}

/// Ingestion URL for the configured host.
fn capture_url(api_host: &str) -> String {
    format!("{}/capture/", api_host.trim_end_matches('/'))
}

#[cfg(target_arch = "wasm32")]
fn spawn_forget(request: reqwest::RequestBuilder) {
    wasm_bindgen_futures::spawn_local(async move {
        let _ = request.send().await;
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_forget(_request: reqwest::RequestBuilder) {
    // Capture only exists in the browser; there is no event loop to ride
    // here, so the request is dropped.
}

/// Generate an anonymous session id.
#[cfg(target_arch = "wasm32")]
fn session_id() -> String {
    let entropy = (js_sys::Math::random() * 1e12) as u64;
    format!("anon-{:x}-{:x}", js_sys::Date::now() as u64, entropy)
}

#[cfg(not(target_arch = "wasm32"))]
fn session_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("anon-{:x}-{:x}", nanos, COUNTER.fetch_add(1, Ordering::Relaxed))
}
