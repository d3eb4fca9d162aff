//! Building blocks shared by the section components.

use leptos::prelude::*;

use crate::content::{Button, Image, SectionFrame, is_external};

/// Inline `style` for a section from its resolved colours.
///
/// `None` when neither colour is set, so the attribute is left out.
pub fn frame_style(frame: &SectionFrame) -> Option<String> {
    let mut rules = Vec::new();
    if let Some(bg) = frame.background_color.as_deref().filter(|c| !c.is_empty()) {
        rules.push(format!("background-color:{bg}"));
    }
    if let Some(fg) = frame.text_color.as_deref().filter(|c| !c.is_empty()) {
        rules.push(format!("color:{fg}"));
    }
    (!rules.is_empty()).then(|| rules.join(";"))
}

/// Anchor that opens external targets in a new tab.
#[component]
pub fn SmartLink(#[prop(into)] href: String, #[prop(into)] class: String, children: Children) -> impl IntoView {
    let external = is_external(&href);

    view! {
        <a
            href=href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

/// Call-to-action button. Renders nothing until it has both text and a target.
#[component]
pub fn ButtonLink(
    button: Button,
    /// Overrides the variant stored in content
    #[prop(optional)]
    variant: Option<&'static str>,
) -> impl IntoView {
    let complete = !button.text.trim().is_empty() && !button.href.trim().is_empty();

    complete.then(move || {
        let variant = variant
            .map(str::to_string)
            .or(button.variant)
            .unwrap_or_else(|| "primary".to_string());
        let class = format!("btn btn-{variant}");
        view! { <SmartLink href=button.href class=class>{button.text}</SmartLink> }
    })
}

/// Lazily loaded image; nothing when `src` is empty.
#[component]
pub fn SectionImage(image: Image, #[prop(default = "section-image")] class: &'static str) -> impl IntoView {
    (!image.src.trim().is_empty()).then(move || {
        view! { <img class=class src=image.src alt=image.alt loading="lazy" /> }
    })
}

/// Section heading with optional subtitle.
#[component]
pub fn SectionTitle(title: String, subtitle: Option<String>) -> impl IntoView {
    view! {
        {(!title.is_empty()).then(|| view! { <h2 class="section-title">{title}</h2> })}
        {subtitle
            .filter(|s| !s.is_empty())
            .map(|s| view! { <p class="section-subtitle">{s}</p> })}
    }
}
