//! Technology: highlight cards next to an image, with a call to action.

use leptos::prelude::*;

use super::{ButtonLink, SectionImage};
use crate::content::{FeatureItem, TechnologyContent};

/// Technology highlights
#[component]
pub fn TechnologySection(content: TechnologyContent) -> impl IntoView {
    let TechnologyContent {
        title,
        items,
        image,
        button,
        ..
    } = content;

    view! {
        <div class="container split">
            <div>
                <h2 class="section-title">{title}</h2>
                <div class="stack">
                    {items.into_iter().map(|item| view! { <FeatureCard item=item /> }).collect::<Vec<_>>()}
                </div>
                <ButtonLink button=button />
            </div>
            <SectionImage image=image />
        </div>
    }
}

/// Icon, title and description card. Shared with the benefits grid.
#[component]
pub fn FeatureCard(item: FeatureItem) -> impl IntoView {
    view! {
        <article class="card">
            {(!item.icon.is_empty()).then(|| view! { <div class="card-icon">{item.icon}</div> })}
            <h3 class="card-title">{item.title}</h3>
            {(!item.description.is_empty()).then(|| view! { <p class="card-text">{item.description}</p> })}
        </article>
    }
}
