//! Waitlist signup workflow.
//!
//! The only stateful logic on the landing page lives here: a small state
//! machine that takes an email field from `idle` through `loading` to
//! `success` or `error`, with three guards in front of the network call:
//!
//! - rate limit: a 5 second cooldown between submit attempts
//! - honeypot: non-empty hidden field drops the attempt silently
//! - shape check: the email must look like `local@domain.tld`
//!
//! The machine is UI-agnostic; the site crate wires it to signals, the
//! webhook client, and the browser's timer for the deferred error clear.

mod error;
mod flow;
mod state;
mod validate;

pub use error::*;
pub use flow::*;
pub use state::*;
pub use validate::*;
