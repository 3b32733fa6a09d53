//! Benefits grid.

use leptos::prelude::*;

use crate::data::BenefitsContent;

/// Three-across grid of benefit tiles.
#[component]
pub fn BenefitGrid(content: BenefitsContent) -> impl IntoView {
    view! {
        <section class="benefits">
            {content
                .benefits
                .into_iter()
                .map(|b| {
                    view! {
                        <BenefitItem icon=b.icon title=b.title description=b.description/>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// A self-contained visual block: icon handle, title, description.
/// Stateless; a pure function of its inputs.
#[component]
pub fn BenefitItem(icon: String, title: String, description: String) -> impl IntoView {
    view! {
        <div class="benefit">
            <div class="benefit-icon">{icon}</div>
            <h3 class="benefit-title">{title}</h3>
            <p class="benefit-description">{description}</p>
        </div>
    }
}
