//! Signup flow state machine.

use applywell_webhook::{WaitlistPayload, WebhookError};

use crate::error::SignupError;
use crate::state::{SignupState, SignupStatus};
use crate::validate::is_valid_email;

/// Minimum interval between submit attempts, enforced locally.
pub const RATE_LIMIT_WINDOW_MS: u64 = 5_000;

/// Delay before a surfaced error clears itself.
pub const ERROR_CLEAR_DELAY_MS: u64 = 6_000;

/// What the caller should do with a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Guards passed; issue the webhook call, then [`SignupFlow::resolve`],
    /// which hands back the generation for the deferred clear.
    Proceed { payload: WaitlistPayload },
    /// A guard failed and an error is now showing; schedule the deferred
    /// clear against `generation`.
    Rejected {
        error: SignupError,
        generation: u64,
    },
    /// Nothing to do: the attempt was silently dropped (bot-suspected) or
    /// a submission is already in flight.
    Dropped,
}

/// The signup form's state machine.
///
/// Holds the transient [`SignupState`] plus a generation counter. The
/// counter ticks on every state epoch (edit, attempt, resolution, reset);
/// a deferred clear captures the generation it was scheduled from and
/// [`SignupFlow::clear_transient`] ignores it once the state has moved
/// on, so a slow timer can never knock a newer `loading` or `success`
/// state back to idle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFlow {
    state: SignupState,
    generation: u64,
}

impl SignupFlow {
    /// Create a fresh flow in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form state.
    pub fn state(&self) -> &SignupState {
        &self.state
    }

    /// Current phase.
    pub fn status(&self) -> SignupStatus {
        self.state.status
    }

    /// Current generation; ticks on every state epoch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Record a keystroke in the email field.
    ///
    /// Editing while an error is showing reverts the status to idle
    /// immediately; the message text stays behind unrendered until a
    /// deferred clear catches up with it.
    pub fn edit_email(&mut self, value: impl Into<String>) {
        self.state.email = value.into();
        if self.state.status == SignupStatus::Error {
            self.state.status = SignupStatus::Idle;
        }
        self.bump();
    }

    /// Record a keystroke in the hidden honeypot field.
    pub fn edit_honeypot(&mut self, value: impl Into<String>) {
        self.state.honeypot = value.into();
    }

    /// Run the submit guards at `now_ms` (epoch milliseconds).
    ///
    /// Guard order matters: the cooldown window arms as soon as the
    /// rate-limit guard passes, so a failed honeypot or shape check still
    /// counts as an attempt against the next click.
    pub fn begin_submit(&mut self, now_ms: u64) -> SubmitDecision {
        if self.state.status == SignupStatus::Loading {
            return SubmitDecision::Dropped;
        }

        if now_ms.saturating_sub(self.state.last_submit_ms) < RATE_LIMIT_WINDOW_MS {
            return self.reject(SignupError::RateLimited);
        }
        self.state.last_submit_ms = now_ms;

        if !self.state.honeypot.is_empty() {
            // Bot traffic: no status change, no call, no feedback.
            return SubmitDecision::Dropped;
        }

        if !is_valid_email(&self.state.email) {
            return self.reject(SignupError::InvalidEmail);
        }

        self.state.status = SignupStatus::Loading;
        self.state.error_message.clear();
        self.bump();

        SubmitDecision::Proceed {
            payload: WaitlistPayload::new(self.state.email.clone(), self.state.honeypot.clone()),
        }
    }

    fn reject(&mut self, error: SignupError) -> SubmitDecision {
        self.state.status = SignupStatus::Error;
        self.state.error_message = error.user_message().unwrap_or_default().to_string();
        self.bump();
        SubmitDecision::Rejected {
            error,
            generation: self.generation,
        }
    }

    /// Apply the outcome of the webhook call.
    ///
    /// Returns the new generation so the caller can schedule the deferred
    /// clear against it.
    pub fn resolve(&mut self, outcome: Result<(), WebhookError>) -> u64 {
        match outcome {
            Ok(()) => {
                self.state.status = SignupStatus::Success;
                self.state.email.clear();
                self.state.error_message.clear();
            }
            Err(e) => {
                let error = SignupError::from(&e);
                self.state.status = SignupStatus::Error;
                self.state.error_message = error.user_message().unwrap_or_default().to_string();
            }
        }
        self.bump();
        self.generation
    }

    /// Manual reset from the success panel ("Add another email").
    pub fn reset(&mut self) {
        self.state.status = SignupStatus::Idle;
        self.state.error_message.clear();
        self.bump();
    }

    /// Deferred clear, fired `ERROR_CLEAR_DELAY_MS` after the attempt
    /// that scheduled it.
    ///
    /// Applies only while `generation` still matches: clears the message
    /// and, unless the form reached success in the meantime, resets the
    /// status to idle. Stale generations are ignored.
    pub fn clear_transient(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.state.error_message.clear();
        if self.state.status != SignupStatus::Success {
            self.state.status = SignupStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    use applywell_webhook::WaitlistEndpoint;

    /// Wall-clock-ish base so the zero initial timestamp behaves as it
    /// does in a browser.
    const T0: u64 = 1_700_000_000_000;

    /// Scripted endpoint that records every payload it receives.
    struct MockEndpoint {
        status: Cell<u16>,
        reachable: Cell<bool>,
        calls: RefCell<Vec<WaitlistPayload>>,
    }

    impl MockEndpoint {
        fn ok() -> Self {
            Self {
                status: Cell::new(200),
                reachable: Cell::new(true),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with_status(status: u16) -> Self {
            let endpoint = Self::ok();
            endpoint.status.set(status);
            endpoint
        }

        fn unreachable() -> Self {
            let endpoint = Self::ok();
            endpoint.reachable.set(false);
            endpoint
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl WaitlistEndpoint for MockEndpoint {
        async fn submit(&self, payload: &WaitlistPayload) -> Result<(), WebhookError> {
            self.calls.borrow_mut().push(payload.clone());
            if !self.reachable.get() {
                return Err(WebhookError::Connection("connection refused".to_string()));
            }
            match self.status.get() {
                200 => Ok(()),
                status => Err(WebhookError::Rejected { status }),
            }
        }
    }

    /// Drive one attempt the way the form component does: guards, then
    /// the call, then resolution.
    async fn submit_via(flow: &mut SignupFlow, endpoint: &MockEndpoint, now_ms: u64) {
        if let SubmitDecision::Proceed { payload, .. } = flow.begin_submit(now_ms) {
            let outcome = endpoint.submit(&payload).await;
            flow.resolve(outcome);
        }
    }

    // === Guard Tests ===

    #[test]
    fn test_invalid_email_short_circuits_without_network() {
        let endpoint = MockEndpoint::ok();

        for bad in ["", "not-an-email", "missing@tld", "@nope.com", "a b@c.d"] {
            let mut flow = SignupFlow::new();
            flow.edit_email(bad);

            let decision = flow.begin_submit(T0);
            assert_eq!(
                decision,
                SubmitDecision::Rejected {
                    error: SignupError::InvalidEmail,
                    generation: flow.generation(),
                },
                "expected rejection for {bad:?}"
            );
            assert_eq!(flow.status(), SignupStatus::Error);
            assert_eq!(
                flow.state().error_message,
                "Please enter a valid email address."
            );
        }

        assert_eq!(endpoint.call_count(), 0);
    }

    #[tokio::test]
    async fn test_second_attempt_inside_window_is_rate_limited() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        submit_via(&mut flow, &endpoint, T0).await;
        assert_eq!(flow.status(), SignupStatus::Success);

        // Second click 2 seconds later, email valid both times.
        flow.reset();
        flow.edit_email("janedoe@gmail.com");
        let decision = flow.begin_submit(T0 + 2_000);

        assert!(matches!(
            decision,
            SubmitDecision::Rejected {
                error: SignupError::RateLimited,
                ..
            }
        ));
        assert_eq!(
            flow.state().error_message,
            "Please wait before submitting again."
        );
        assert_eq!(endpoint.call_count(), 1);
    }

    #[test]
    fn test_rate_limit_applies_regardless_of_email_validity() {
        let mut flow = SignupFlow::new();

        // First attempt fails the shape check but still arms the window.
        flow.edit_email("not-an-email");
        flow.begin_submit(T0);

        flow.edit_email("janedoe@gmail.com");
        let decision = flow.begin_submit(T0 + 1_000);

        assert!(matches!(
            decision,
            SubmitDecision::Rejected {
                error: SignupError::RateLimited,
                ..
            }
        ));
    }

    #[test]
    fn test_window_reopens_after_cooldown() {
        let mut flow = SignupFlow::new();
        // First attempt fails the shape check; the window arms anyway.
        flow.edit_email("not-an-email");
        flow.begin_submit(T0);

        flow.edit_email("janedoe@gmail.com");
        let decision = flow.begin_submit(T0 + RATE_LIMIT_WINDOW_MS);
        assert!(matches!(decision, SubmitDecision::Proceed { .. }));
    }

    #[test]
    fn test_honeypot_drops_silently() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");
        flow.edit_honeypot("https://spam.example");

        let status_before = flow.status();
        let decision = flow.begin_submit(T0);

        assert_eq!(decision, SubmitDecision::Dropped);
        assert_eq!(flow.status(), status_before);
        assert!(flow.state().error_message.is_empty());
        assert_eq!(endpoint.call_count(), 0);

        // The dropped attempt still armed the cooldown window.
        flow.edit_honeypot("");
        assert!(matches!(
            flow.begin_submit(T0 + 1_000),
            SubmitDecision::Rejected {
                error: SignupError::RateLimited,
                ..
            }
        ));
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        assert!(matches!(flow.begin_submit(T0), SubmitDecision::Proceed { .. }));
        assert_eq!(flow.status(), SignupStatus::Loading);

        // A second click before the response resolves.
        assert_eq!(
            flow.begin_submit(T0 + RATE_LIMIT_WINDOW_MS),
            SubmitDecision::Dropped
        );
    }

    // === Resolution Tests ===

    #[tokio::test]
    async fn test_accepted_submission_reaches_success_and_clears_email() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        submit_via(&mut flow, &endpoint, T0).await;

        assert_eq!(flow.status(), SignupStatus::Success);
        assert!(flow.state().email.is_empty());
        assert!(flow.state().error_message.is_empty());
        assert_eq!(endpoint.call_count(), 1);
        assert_eq!(
            endpoint.calls.borrow()[0],
            WaitlistPayload::new("janedoe@gmail.com", "")
        );
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_email_and_stays_generic() {
        let endpoint = MockEndpoint::with_status(500);
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        submit_via(&mut flow, &endpoint, T0).await;

        assert_eq!(flow.status(), SignupStatus::Error);
        assert_eq!(flow.state().email, "janedoe@gmail.com");
        // Generic copy, no status-code detail.
        assert_eq!(
            flow.state().error_message,
            "Something went wrong. Please try again."
        );
    }

    #[tokio::test]
    async fn test_network_failure_surfaces_connectivity_message() {
        let endpoint = MockEndpoint::unreachable();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        submit_via(&mut flow, &endpoint, T0).await;

        assert_eq!(flow.status(), SignupStatus::Error);
        assert_eq!(
            flow.state().error_message,
            "Unable to connect. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_two_clicks_within_window_make_one_call() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        submit_via(&mut flow, &endpoint, T0).await;
        flow.reset();
        flow.edit_email("janedoe@gmail.com");
        submit_via(&mut flow, &endpoint, T0 + 2_000).await;

        assert_eq!(endpoint.call_count(), 1);
        assert_eq!(flow.status(), SignupStatus::Error);
    }

    // === Transition Tests ===

    #[test]
    fn test_keystroke_reverts_error_to_idle() {
        let mut flow = SignupFlow::new();
        flow.edit_email("not-an-email");
        flow.begin_submit(T0);
        assert_eq!(flow.status(), SignupStatus::Error);

        flow.edit_email("not-an-emailx");
        assert_eq!(flow.status(), SignupStatus::Idle);
    }

    #[test]
    fn test_reset_reopens_form_after_success() {
        let mut flow = SignupFlow::new();
        flow.state.status = SignupStatus::Success;

        flow.reset();
        assert_eq!(flow.status(), SignupStatus::Idle);
    }

    // === Deferred Clear Tests ===

    #[test]
    fn test_clear_resets_error_to_idle() {
        let mut flow = SignupFlow::new();
        flow.edit_email("not-an-email");
        let generation = match flow.begin_submit(T0) {
            SubmitDecision::Rejected { generation, .. } => generation,
            other => panic!("unexpected decision: {other:?}"),
        };

        flow.clear_transient(generation);

        assert_eq!(flow.status(), SignupStatus::Idle);
        assert!(flow.state().error_message.is_empty());
    }

    #[tokio::test]
    async fn test_clear_preserves_success() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        if let SubmitDecision::Proceed { payload, .. } = flow.begin_submit(T0) {
            let outcome = endpoint.submit(&payload).await;
            let generation = flow.resolve(outcome);
            flow.clear_transient(generation);
        }

        assert_eq!(flow.status(), SignupStatus::Success);
    }

    #[test]
    fn test_stale_clear_never_knocks_back_a_newer_attempt() {
        let mut flow = SignupFlow::new();
        flow.edit_email("not-an-email");
        let stale = match flow.begin_submit(T0) {
            SubmitDecision::Rejected { generation, .. } => generation,
            other => panic!("unexpected decision: {other:?}"),
        };

        // A newer attempt goes into flight before the old timer fires.
        flow.edit_email("janedoe@gmail.com");
        assert!(matches!(
            flow.begin_submit(T0 + RATE_LIMIT_WINDOW_MS),
            SubmitDecision::Proceed { .. }
        ));

        flow.clear_transient(stale);
        assert_eq!(flow.status(), SignupStatus::Loading);
    }

    #[test]
    fn test_clear_after_eager_keystroke_revert_is_stale() {
        let mut flow = SignupFlow::new();
        flow.edit_email("not-an-email");
        let generation = match flow.begin_submit(T0) {
            SubmitDecision::Rejected { generation, .. } => generation,
            other => panic!("unexpected decision: {other:?}"),
        };

        // Typing reverted the status already; the timer's view is stale.
        flow.edit_email("janedoe@gmail.com");
        flow.clear_transient(generation);

        assert_eq!(flow.status(), SignupStatus::Idle);
        // The stale message is still in memory (unrendered), proving the
        // clear was a no-op rather than a second reset.
        assert_eq!(
            flow.state().error_message,
            "Please enter a valid email address."
        );
    }

    // === Scenario Tests ===

    #[tokio::test]
    async fn test_scenario_valid_signup() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("janedoe@gmail.com");

        submit_via(&mut flow, &endpoint, T0).await;

        assert_eq!(flow.status(), SignupStatus::Success);
        assert_eq!(flow.state().email, "");
    }

    #[tokio::test]
    async fn test_scenario_invalid_email() {
        let endpoint = MockEndpoint::ok();
        let mut flow = SignupFlow::new();
        flow.edit_email("not-an-email");

        submit_via(&mut flow, &endpoint, T0).await;

        assert_eq!(flow.status(), SignupStatus::Error);
        assert_eq!(
            flow.state().error_message,
            "Please enter a valid email address."
        );
        assert_eq!(endpoint.call_count(), 0);
    }
}
