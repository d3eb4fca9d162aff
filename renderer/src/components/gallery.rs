use leptos::prelude::*;

use super::{SectionImage, SectionTitle};
use crate::content::GalleryContent;

/// Image grid
#[component]
pub fn GallerySection(content: GalleryContent) -> impl IntoView {
    view! {
        <div class="container">
            <SectionTitle title=content.title subtitle=content.subtitle />
            <div class="gallery-grid">
                {content
                    .images
                    .into_iter()
                    .map(|image| view! { <SectionImage image=image class="gallery-image" /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
