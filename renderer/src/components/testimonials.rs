//! Testimonials: embedded videos.

use leptos::prelude::*;

use crate::content::{TestimonialsContent, Video};

/// Grid of embedded testimonial videos
#[component]
pub fn TestimonialsSection(content: TestimonialsContent) -> impl IntoView {
    let title = content.title.clone();

    view! {
        <div class="container">
            <h2 class="section-title centered">{content.title}</h2>
            <div class="video-grid">
                {content
                    .videos
                    .into_iter()
                    .filter(|v| !v.embed_url.is_empty())
                    .enumerate()
                    .map(|(idx, video)| {
                        let fallback = format!("{title} {}", idx + 1);
                        view! { <VideoEmbed video=video fallback_title=fallback /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn VideoEmbed(video: Video, fallback_title: String) -> impl IntoView {
    let title = video.title.filter(|t| !t.is_empty()).unwrap_or(fallback_title);

    view! {
        <div class="video-frame">
            <iframe
                src=video.embed_url
                title=title
                allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=""
            ></iframe>
        </div>
    }
}
