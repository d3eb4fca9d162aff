//! Services: checklist beside an image.

use leptos::prelude::*;

use super::{ButtonLink, ICON_CHECK, Icon, SectionImage};
use crate::content::{ServiceItem, ServicesContent};

/// Service checklist with image
#[component]
pub fn ServicesSection(content: ServicesContent) -> impl IntoView {
    let ServicesContent {
        title,
        items,
        image,
        button,
        ..
    } = content;

    view! {
        <div class="container split">
            <SectionImage image=image />
            <div>
                <h2 class="section-title">{title}</h2>
                <ul class="checklist">
                    {items.into_iter().map(|item| view! { <ServiceRow item=item /> }).collect::<Vec<_>>()}
                </ul>
                {button.map(|button| view! { <ButtonLink button=button /> })}
            </div>
        </div>
    }
}

#[component]
fn ServiceRow(item: ServiceItem) -> impl IntoView {
    let marker = if item.icon.is_empty() {
        view! { <Icon path=ICON_CHECK size="18" class="icon icon-accent" /> }.into_any()
    } else {
        view! { <span class="item-icon">{item.icon}</span> }.into_any()
    };

    view! {
        <li>
            {marker}
            <span>{item.text}</span>
        </li>
    }
}
