//! Hero section.

use leptos::prelude::*;

use crate::data::HeroContent;

/// Headline and supporting copy. Purely presentational.
#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-headline">
                {content.headline}
                <span class="hero-accent">{content.headline_accent}</span>
            </h1>
            <p class="hero-subheadline">{content.subheadline}</p>
        </section>
    }
}
