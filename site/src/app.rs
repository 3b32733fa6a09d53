//! Application root.

use applywell_analytics::{Analytics, EVENT_PAGE_VIEW};
use applywell_config::SiteConfig;
use applywell_webhook::WebhookClient;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Style, Title};

use crate::data::{BenefitsContent, HeroContent};
use crate::sections::{BenefitGrid, Hero, SignupForm};

/// Root component: reads configuration once, installs the webhook client
/// and the analytics collaborator into context, and composes the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_env();

    let analytics = Analytics::new(config.analytics.clone());
    analytics.capture(EVENT_PAGE_VIEW);

    provide_context(WebhookClient::new(&config.webhook));
    provide_context(analytics);

    view! {
        <Title text="ApplyWell - AI that knows when to step back"/>
        <Meta
            name="description"
            content="Apply effectively with AI that knows when to step back. Join the ApplyWell waitlist."
        />
        <Style>{STYLES}</Style>

        <main class="page">
            <Hero content=HeroContent::default()/>
            <SignupForm/>
            <BenefitGrid content=BenefitsContent::default()/>
        </main>
    }
}

const STYLES: &str = r##"
:root {
    --accent: #ff6b35;
    --accent-hover: #e85a2d;
    --accent-active: #d64d23;
    --bg: #ffffff;
    --text: #111827;
    --text-muted: #6b7280;
    --border: #e5e7eb;
    --error: #ef4444;
    --success-bg: #f0fdf4;
    --success-border: #bbf7d0;
    --success-text: #166534;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

.page {
    max-width: 48rem;
    margin: 0 auto;
    padding: 5rem 1.5rem 8rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

/* Hero */
.hero {
    max-width: 42rem;
}

.hero-headline {
    font-size: 3.5rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    line-height: 1.1;
}

.hero-accent {
    color: #9ca3af;
}

.hero-subheadline {
    margin-top: 2rem;
    font-size: 1.25rem;
    font-weight: 500;
    color: var(--text-muted);
    max-width: 32rem;
    margin-left: auto;
    margin-right: auto;
}

/* Signup */
.signup {
    width: 100%;
    max-width: 28rem;
    margin-top: 4rem;
}

.form-row {
    display: flex;
    gap: 0.75rem;
}

.email-input {
    flex: 1;
    padding: 1rem 1.5rem;
    font-size: 1.125rem;
    border: 2px solid var(--border);
    border-radius: 0.75rem;
    outline: none;
    transition: border-color 0.2s;
}

.email-input:focus {
    border-color: var(--accent);
}

.email-input.has-error {
    border-color: var(--error);
}

.submit-button {
    padding: 1rem 2rem;
    background: var(--accent);
    color: white;
    font-size: 1.125rem;
    font-weight: 600;
    border: none;
    border-radius: 0.75rem;
    cursor: pointer;
    transition: background 0.2s;
    min-width: 10rem;
}

.submit-button:hover { background: var(--accent-hover); }
.submit-button:active { background: var(--accent-active); }

.submit-button:disabled,
.email-input:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.error-message {
    margin-top: 0.5rem;
    text-align: left;
    font-size: 0.8rem;
    font-weight: 500;
    color: var(--error);
}

.honeypot {
    display: none;
    position: absolute;
}

.signup-success {
    background: var(--success-bg);
    border: 1px solid var(--success-border);
    border-radius: 0.75rem;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.success-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: var(--success-border);
    color: var(--success-text);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1rem;
}

.success-title {
    font-size: 1.125rem;
    font-weight: 600;
}

.success-body {
    margin-top: 0.5rem;
    color: var(--text-muted);
}

.success-reset {
    margin-top: 1.5rem;
    background: none;
    border: none;
    font-size: 0.875rem;
    color: var(--text-muted);
    text-decoration: underline;
    text-underline-offset: 4px;
    cursor: pointer;
}

.success-reset:hover { color: var(--text); }

/* Benefits */
.benefits {
    margin-top: 5rem;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 3rem;
    width: 100%;
}

.benefit {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.benefit-icon {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 1rem;
    background: #f9fafb;
    border: 1px solid #f3f4f6;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1.25rem;
}

.benefit-title {
    font-size: 1.125rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
}

.benefit-description {
    color: var(--text-muted);
    font-size: 0.9375rem;
}

@media (max-width: 768px) {
    .hero-headline { font-size: 2.5rem; }
    .form-row { flex-direction: column; }
    .benefits { grid-template-columns: 1fr; }
}
"##;
