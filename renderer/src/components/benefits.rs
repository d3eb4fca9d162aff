use leptos::prelude::*;

use super::FeatureCard;
use crate::content::BenefitsContent;

/// Benefits grid
#[component]
pub fn BenefitsSection(content: BenefitsContent) -> impl IntoView {
    view! {
        <div class="container">
            <h2 class="section-title centered">{content.title}</h2>
            <div class="card-grid">
                {content
                    .items
                    .into_iter()
                    .map(|item| view! { <FeatureCard item=item /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
