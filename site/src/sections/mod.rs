//! Section components for the landing page.

mod benefits;
mod hero;
mod signup;

pub use benefits::*;
pub use hero::*;
pub use signup::*;
