//! Page copy as data.
//!
//! The sections render whatever they are handed; the shipped copy lives
//! in the `Default` impls so swapping it out stays a one-place edit.

use serde::{Deserialize, Serialize};

/// Hero copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    /// Main headline, minus the accented tail.
    pub headline: String,
    /// Trailing fragment rendered de-emphasized.
    pub headline_accent: String,
    /// Supporting headline.
    pub subheadline: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Apply effectively with AI that knows when to ".to_string(),
            headline_accent: "step back.".to_string(),
            subheadline: "From software developers who hate mass-applying. \
                LLMs can speed up job applications, but they shouldn't turn \
                your resume into a generic template. We're covering that gap."
                .to_string(),
        }
    }
}

/// One benefit tile: icon handle plus copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Benefit {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Benefits grid content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsContent {
    pub benefits: Vec<Benefit>,
}

impl Default for BenefitsContent {
    fn default() -> Self {
        Self {
            benefits: vec![
                Benefit::new(
                    "💼",
                    "Automate your applications effectively",
                    "Remove the time-wasting, soul-crushing busy work that is \
                     mass-applying for jobs. We're looking at you, Greenhouse \
                     and Workday.",
                ),
                Benefit::new(
                    "🛡️",
                    "Maintain control and quality",
                    "Use AI as it was meant to be used: as a tool, not a \
                     replacement for your experience. You are always in the \
                     loop fact-checking LLM output with ApplyWell.",
                ),
                Benefit::new(
                    "❓",
                    "Unsure about a role you might be qualified for?",
                    "We've got you covered. You'll receive instant analysis \
                     before you apply, so you know for sure whether that one \
                     role you keep eyeing is worth it.",
                ),
            ],
        }
    }
}
