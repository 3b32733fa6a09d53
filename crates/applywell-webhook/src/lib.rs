//! Waitlist webhook wire contract and client.
//!
//! The landing site makes exactly one kind of outbound call: a JSON POST
//! of a signup payload to a configured webhook. This crate owns that
//! contract end to end:
//!
//! - `WaitlistPayload` - the request body
//! - `WAITLIST_KEY_HEADER` - the shared-secret header name
//! - `WaitlistEndpoint` - the trait seam the workflow submits through
//! - `WebhookClient` - the `reqwest`-backed implementation (browser
//!   `fetch` on wasm32)

mod client;
mod payload;

pub use client::*;
pub use payload::*;
