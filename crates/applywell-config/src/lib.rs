//! Startup configuration for the ApplyWell landing site.
//!
//! Everything here is read once when the page boots and never changes
//! afterwards. A client-side rendered app has no runtime environment to
//! query, so `from_env` resolves against compile-time environment
//! variables instead:
//!
//! - `APPLYWELL_WEBHOOK_URL` - waitlist webhook endpoint
//! - `APPLYWELL_WAITLIST_KEY` - shared-secret header value
//! - `APPLYWELL_ANALYTICS_KEY` - analytics project API key
//! - `APPLYWELL_ANALYTICS_HOST` - analytics ingestion host

use serde::{Deserialize, Serialize};

/// Outbound webhook configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookConfig {
    /// Endpoint URL the signup form posts to.
    pub endpoint: String,
    /// Static `waitlist-key` header value. A lightweight bot deterrent,
    /// not a security boundary.
    pub waitlist_key: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/waitlist".to_string(),
            waitlist_key: String::new(),
        }
    }
}

impl WebhookConfig {
    /// Create a webhook configuration.
    pub fn new(endpoint: impl Into<String>, waitlist_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            waitlist_key: waitlist_key.into(),
        }
    }
}

/// Analytics provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsConfig {
    /// Project API key. Empty disables capture entirely.
    pub api_key: String,
    /// Ingestion host, e.g. `https://eu.i.posthog.com`.
    pub api_host: String,
}

impl AnalyticsConfig {
    /// Create an analytics configuration.
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    /// Whether capture is configured at all.
    pub fn is_enabled(&self) -> bool {
        !self.api_key.is_empty() && !self.api_host.is_empty()
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Waitlist webhook settings.
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Analytics provider settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl SiteConfig {
    /// Create an empty configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the webhook configuration.
    pub fn with_webhook(mut self, webhook: WebhookConfig) -> Self {
        self.webhook = webhook;
        self
    }

    /// Set the analytics configuration.
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }

    /// Resolve configuration from compile-time environment variables.
    ///
    /// Unset variables fall back to defaults, which keeps local builds
    /// working: the form posts to a relative `/api/waitlist` path and
    /// analytics stays disabled.
    pub fn from_env() -> Self {
        let defaults = WebhookConfig::default();
        Self {
            webhook: WebhookConfig {
                endpoint: option_env!("APPLYWELL_WEBHOOK_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.endpoint),
                waitlist_key: option_env!("APPLYWELL_WAITLIST_KEY")
                    .map(str::to_string)
                    .unwrap_or(defaults.waitlist_key),
            },
            analytics: AnalyticsConfig {
                api_key: option_env!("APPLYWELL_ANALYTICS_KEY")
                    .unwrap_or_default()
                    .to_string(),
                api_host: option_env!("APPLYWELL_ANALYTICS_HOST")
                    .unwrap_or_default()
                    .to_string(),
            },
        }
    }
}
