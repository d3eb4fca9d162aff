use leptos::prelude::*;

use super::SmartLink;
use crate::content::FooterContent;

/// Page footer
#[component]
pub fn FooterSection(content: FooterContent) -> impl IntoView {
    let FooterContent {
        instagram,
        copyright,
        legal_link,
        ..
    } = content;

    view! {
        <footer class="container site-footer">
            {instagram
                .filter(|link| !link.url.is_empty())
                .map(|link| {
                    let text = if link.text.is_empty() { link.url.clone() } else { link.text };
                    view! { <SmartLink href=link.url class="footer-social">{text}</SmartLink> }
                })}
            <p class="footer-copyright">{copyright}</p>
            {legal_link
                .filter(|link| !link.href.is_empty())
                .map(|link| view! { <SmartLink href=link.href class="footer-legal">{link.text}</SmartLink> })}
        </footer>
    }
}
