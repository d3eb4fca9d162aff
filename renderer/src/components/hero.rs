//! Hero: headline, description and calls to action.

use leptos::prelude::*;

use super::{ButtonLink, SectionImage};
use crate::content::HeroContent;

/// Top-of-page headline block
#[component]
pub fn HeroSection(content: HeroContent) -> impl IntoView {
    let HeroContent {
        title,
        description,
        primary_button,
        secondary_button,
        image,
        ..
    } = content;

    view! {
        <div class="container split">
            <div class="hero-copy">
                <h1 class="hero-title">{title}</h1>
                <p class="hero-description">{description}</p>
                <div class="actions">
                    <ButtonLink button=primary_button />
                    {secondary_button.map(|button| view! { <ButtonLink button=button variant="secondary" /> })}
                </div>
            </div>
            <SectionImage image=image class="hero-image" />
        </div>
    }
}
