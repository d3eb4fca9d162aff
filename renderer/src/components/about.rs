use leptos::prelude::*;

use super::{ButtonLink, SectionImage};
use crate::content::AboutContent;

/// About-us text with optional image and button
#[component]
pub fn AboutSection(content: AboutContent) -> impl IntoView {
    let AboutContent {
        title,
        description,
        image,
        button,
        ..
    } = content;
    let has_image = image.as_ref().is_some_and(|i| !i.src.is_empty());
    let layout = if has_image { "container split" } else { "container narrow" };

    view! {
        <div class=layout>
            <div>
                <h2 class="section-title">{title}</h2>
                <p class="section-text">{description}</p>
                {button.map(|button| view! { <ButtonLink button=button /> })}
            </div>
            {image.map(|image| view! { <SectionImage image=image /> })}
        </div>
    }
}
