use leptos::prelude::*;

use super::ButtonLink;
use crate::content::StepsContent;

/// Numbered how-it-works steps
#[component]
pub fn StepsSection(content: StepsContent) -> impl IntoView {
    let StepsContent {
        title,
        steps,
        button,
        ..
    } = content;

    view! {
        <div class="container">
            <h2 class="section-title centered">{title}</h2>
            <ol class="steps">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(idx, step)| view! {
                        <li class="step">
                            <span class="step-number">{(idx + 1).to_string()}</span>
                            <h3 class="card-title">{step.title}</h3>
                            <p class="card-text">{step.description}</p>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ol>
            <div class="actions centered">
                <ButtonLink button=button />
            </div>
        </div>
    }
}
