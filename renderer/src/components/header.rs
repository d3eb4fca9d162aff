//! Header: logo, navigation and phone.

use leptos::prelude::*;

use super::{ICON_PHONE, Icon, SmartLink};
use crate::content::{HeaderContent, Logo, LogoType};

/// Site header bar
#[component]
pub fn HeaderSection(content: HeaderContent) -> impl IntoView {
    let HeaderContent {
        logo,
        navigation,
        phone,
        ..
    } = content;

    view! {
        <header class="container site-header">
            <a class="brand" href="#">
                <BrandMark logo=logo />
            </a>
            {(!navigation.is_empty()).then(|| view! {
                <nav class="site-nav">
                    {navigation
                        .into_iter()
                        .map(|link| view! {
                            <SmartLink href=link.href class="nav-link">{link.label}</SmartLink>
                        })
                        .collect::<Vec<_>>()}
                </nav>
            })}
            {phone
                .filter(|p| !p.display.is_empty())
                .map(|phone| {
                    let href = if phone.link.is_empty() {
                        format!("tel:{}", phone.display)
                    } else {
                        phone.link
                    };
                    view! {
                        <SmartLink href=href class="header-phone">
                            <Icon path=ICON_PHONE size="18" />
                            <span>{phone.display}</span>
                        </SmartLink>
                    }
                })}
        </header>
    }
}

/// Logo image, or the text wordmark when there is no image to show.
#[component]
fn BrandMark(logo: Logo) -> impl IntoView {
    match (logo.logo_type, logo.src) {
        (LogoType::Image, Some(src)) if !src.is_empty() => {
            let alt = logo.alt.or(logo.text).unwrap_or_default();
            view! { <img class="logo-img" src=src alt=alt /> }.into_any()
        }
        _ => view! {
            <span class="logo-text">{logo.text.unwrap_or_default()}</span>
            {logo.subtitle.map(|s| view! { <span class="logo-subtitle">{s}</span> })}
        }
        .into_any(),
    }
}
