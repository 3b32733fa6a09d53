//! Waitlist signup form.
//!
//! The one stateful component on the page. It owns a [`SignupFlow`]
//! behind a signal and wires the machine to the webhook client, the
//! browser clock, and the deferred error clear.

use std::time::Duration;

use applywell_analytics::{Analytics, EVENT_WAITLIST_SIGNUP};
use applywell_waitlist::{
    SignupFlow, SignupStatus, SubmitDecision, EMAIL_MAX_LEN, ERROR_CLEAR_DELAY_MS,
};
use applywell_webhook::{WaitlistEndpoint, WebhookClient};
use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Email capture form with success panel.
///
/// Expects a [`WebhookClient`] in context; treats [`Analytics`] as an
/// optional collaborator and works identically without it.
#[component]
pub fn SignupForm() -> impl IntoView {
    let client = StoredValue::new(expect_context::<WebhookClient>());
    let analytics = StoredValue::new(use_context::<Analytics>());
    let flow = RwSignal::new(SignupFlow::new());

    let status = move || flow.with(|f| f.status());

    // Every clear is tied to the generation it was scheduled from;
    // `clear_transient` drops stale ones, so a timer left over from an
    // old attempt can't knock a newer one back to idle.
    let schedule_clear = move |generation: u64| {
        set_timeout(
            move || flow.update(|f| f.clear_transient(generation)),
            Duration::from_millis(ERROR_CLEAR_DELAY_MS),
        );
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let decision = flow
            .try_update(|f| f.begin_submit(now_ms()))
            .unwrap_or(SubmitDecision::Dropped);
        match decision {
            SubmitDecision::Proceed { payload, .. } => {
                spawn_local(async move {
                    let outcome = client.get_value().submit(&payload).await;
                    if let Err(e) = &outcome {
                        leptos::logging::error!("waitlist submission failed: {e}");
                    }
                    let accepted = outcome.is_ok();
                    let generation = flow.try_update(|f| f.resolve(outcome)).unwrap_or_default();
                    schedule_clear(generation);
                    if accepted {
                        if let Some(analytics) = analytics.get_value() {
                            analytics.capture(EVENT_WAITLIST_SIGNUP);
                        }
                    }
                });
            }
            SubmitDecision::Rejected { generation, .. } => schedule_clear(generation),
            SubmitDecision::Dropped => {}
        }
    };

    view! {
        <section class="signup">
            <Show
                when=move || status() != SignupStatus::Success
                fallback=move || {
                    view! {
                        <div class="signup-success">
                            <div class="success-icon">"✓"</div>
                            <h3 class="success-title">
                                "Thanks for joining our waitlist! Reply \"unsubscribe\" to any email you receive from us to opt out."
                            </h3>
                            <p class="success-body">
                                "Keep an eye on your inbox (and the spam folder) for emails about our product."
                            </p>
                            <button
                                class="success-reset"
                                on:click=move |_| flow.update(|f| f.reset())
                            >
                                "Add another email"
                            </button>
                        </div>
                    }
                }
            >
                <form class="signup-form" on:submit=on_submit>
                    <div class="form-row">
                        <input
                            type="email"
                            class="email-input"
                            class=("has-error", move || status() == SignupStatus::Error)
                            maxlength=EMAIL_MAX_LEN.to_string()
                            placeholder="janedoe@gmail.com"
                            prop:value=move || flow.with(|f| f.state().email.clone())
                            on:input=move |ev| {
                                flow.update(|f| f.edit_email(event_target_value(&ev)))
                            }
                            disabled=move || status().is_loading()
                        />
                        <button
                            type="submit"
                            class="submit-button"
                            disabled=move || status().is_loading()
                        >
                            {move || if status().is_loading() { "Joining..." } else { "Join the Waitlist" }}
                        </button>
                    </div>
                    <Show when=move || status() == SignupStatus::Error>
                        <p class="error-message">
                            {move || flow.with(|f| f.state().error_message.clone())}
                        </p>
                    </Show>
                    // Unfocusable and invisible; only bots fill it in.
                    <input
                        type="text"
                        class="honeypot"
                        name="website-helper"
                        tabindex="-1"
                        autocomplete="off"
                        aria-hidden="true"
                        prop:value=move || flow.with(|f| f.state().honeypot.clone())
                        on:input=move |ev| {
                            flow.update(|f| f.edit_honeypot(event_target_value(&ev)))
                        }
                    />
                </form>
            </Show>
        </section>
    }
}

/// Submit-time clock, epoch milliseconds.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
