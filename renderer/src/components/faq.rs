use leptos::prelude::*;

use super::{ICON_CARET_DOWN, Icon};
use crate::content::FaqContent;

/// Question list using native `<details>` disclosure, so no script is needed
#[component]
pub fn FaqSection(content: FaqContent) -> impl IntoView {
    view! {
        <div class="container narrow">
            <h2 class="section-title centered">{content.title}</h2>
            <div class="faq-list">
                {content
                    .items
                    .into_iter()
                    .map(|item| view! {
                        <details class="faq-item">
                            <summary>
                                <span>{item.question}</span>
                                <Icon path=ICON_CARET_DOWN size="16" class="icon faq-caret" />
                            </summary>
                            <p class="faq-answer">{item.answer}</p>
                        </details>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
