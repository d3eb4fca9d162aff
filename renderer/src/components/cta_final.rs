use leptos::prelude::*;

use super::{ButtonLink, SectionTitle};
use crate::content::CtaFinalContent;

/// Closing call to action
#[component]
pub fn CtaFinalSection(content: CtaFinalContent) -> impl IntoView {
    view! {
        <div class="container narrow centered">
            <SectionTitle title=content.title subtitle=content.subtitle />
            <div class="actions centered">
                <ButtonLink button=content.button />
            </div>
        </div>
    }
}
