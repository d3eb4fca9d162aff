//! Pricing: plan cards.

use leptos::prelude::*;

use super::{ButtonLink, ICON_CHECK, Icon, SectionTitle};
use crate::content::{PricingContent, PricingPlan};

/// Plan comparison
#[component]
pub fn PricingSection(content: PricingContent) -> impl IntoView {
    view! {
        <div class="container">
            <SectionTitle title=content.title subtitle=content.subtitle />
            <div class="card-grid">
                {content
                    .plans
                    .into_iter()
                    .map(|plan| view! { <PlanCard plan=plan /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let class = if plan.highlighted { "card plan plan-highlighted" } else { "card plan" };
    let variant = if plan.highlighted { "primary" } else { "secondary" };

    view! {
        <article class=class>
            <h3 class="card-title">{plan.name}</h3>
            <p class="plan-price">
                {plan.price}
                {plan.period.map(|p| view! { <span class="plan-period">"/"{p}</span> })}
            </p>
            {plan.description.map(|d| view! { <p class="card-text">{d}</p> })}
            <ul class="checklist">
                {plan
                    .features
                    .into_iter()
                    .map(|feature| view! {
                        <li>
                            <Icon path=ICON_CHECK size="16" class="icon icon-accent" />
                            <span>{feature}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
            {plan.button.map(|button| view! { <ButtonLink button=button variant=variant /> })}
        </article>
    }
}
