//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::SectionView;
use crate::resolve::ResolvedSection;

/// The complete HTML document for a landing page
#[component]
pub fn PageDocument(
    /// `<title>` text
    title: String,
    /// `<meta name="description">` content
    description: String,
    /// `lang` attribute of `<html>`
    lang: String,
    /// Stylesheet inlined into `<head>`
    css: String,
    /// Sections in render order
    sections: Vec<ResolvedSection>,
) -> impl IntoView {
    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style inner_html=css></style>
            </head>
            <body>
                <main class="lp-page">
                    {sections
                        .into_iter()
                        .map(|section| view! { <SectionView section=section /> })
                        .collect::<Vec<_>>()}
                </main>
            </body>
        </html>
    }
}
