//! # lp-renderer
//!
//! Section resolution and Leptos SSR rendering for multi-tenant landing pages.
//!
//! Each tenant account owns landing pages built from an ordered list of
//! configurable sections. This crate turns the stored records into a complete
//! static HTML document:
//!
//! 1. [`resolve_section`] validates a section's type, parses its content,
//!    merges in the account's brand colours (content wins) and, for the header,
//!    forces the brand logo.
//! 2. [`resolve_page`] does that for every active section, in `order_index`
//!    order, skipping (and logging) any section that can't be resolved.
//! 3. [`render_page`] hands the typed payloads to one Leptos component per
//!    section kind and serializes the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use lp_renderer::{render_page, RenderOptions};
//! use lp_renderer::types::{AccountRecord, LandingPage, PageSnapshot, SectionRecord};
//! use serde_json::json;
//!
//! let snapshot = PageSnapshot {
//!     account: AccountRecord { id: "acc".into(), name: "Clinica Sorriso".into(), ..Default::default() },
//!     page: LandingPage { id: "lp".into(), slug: "implantes".into(), title: "Implantes".into(), ..Default::default() },
//!     sections: vec![SectionRecord {
//!         id: "s1".into(),
//!         lp_id: "lp".into(),
//!         section_type: "faq".into(),
//!         order_index: 1,
//!         content_json: json!({ "title": "Perguntas", "items": [{ "question": "Dói?", "answer": "Não." }] }),
//!         active: true,
//!     }],
//! };
//!
//! let rendered = render_page(&snapshot, &RenderOptions::default());
//! assert!(rendered.html.starts_with("<!DOCTYPE html>"));
//! assert!(rendered.html.contains("Perguntas"));
//! assert!(rendered.skipped.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - stored records (account, page, section, snapshot)
//! - [`branding`] - canonical brand settings and the legacy adapter
//! - [`kinds`] - the closed set of section types
//! - [`content`] - typed payload per section type
//! - [`resolve`] / [`page`] - branding merge and page assembly
//! - [`validate`] - ingestion-time content checks
//! - [`repository`] - data access interface
//! - [`components`] / [`styles`] - Leptos components and CSS
//!
//! Resolution is pure and never touches the repository, so sections can be
//! resolved in any order or in parallel.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod branding;
pub mod components;
pub mod content;
pub mod kinds;
pub mod page;
pub mod repository;
pub mod resolve;
pub mod styles;
pub mod types;
pub mod validate;

use components::{PageDocument, SectionView};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use branding::{Branding, BrandingConfig, MigrationOutcome, migrate_account};
pub use kinds::SectionKind;
pub use page::{ResolvedPage, SkippedSection, resolve_page};
pub use repository::{InMemoryRepository, LandingPageRepository, RepositoryError};
pub use resolve::{ResolveError, ResolvedSection, resolve_section};
pub use validate::{ValidationError, validate_content, validate_section};

use types::PageSnapshot;

/// Page-level rendering settings.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// `lang` attribute of the document
    pub lang: String,
    /// Stylesheet appended after [`styles::PAGE_CSS`]
    pub extra_css: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: "pt-BR".to_string(),
            extra_css: None,
        }
    }
}

/// A rendered page and the sections left out of it.
#[derive(Debug)]
pub struct RenderedPage {
    /// Complete HTML document, starting with `<!DOCTYPE html>`
    pub html: String,
    /// Active sections that couldn't be resolved, in page order
    pub skipped: Vec<SkippedSection>,
}

/// Render a complete landing page.
///
/// Branding is taken from the snapshot's account in whichever shape it is
/// stored. Sections that fail to resolve are omitted from the HTML and
/// reported in [`RenderedPage::skipped`]; they never fail the page.
pub fn render_page(snapshot: &PageSnapshot, options: &RenderOptions) -> RenderedPage {
    let branding = Branding::for_account(&snapshot.account);
    let ResolvedPage { sections, skipped } = resolve_page(&snapshot.sections, &branding);

    let title = snapshot.page.title.clone();
    let description = format!("{} - {}", snapshot.page.title, snapshot.account.name);
    let css = match options.extra_css.as_deref() {
        Some(extra) if !extra.trim().is_empty() => format!("{}\n{}", styles::PAGE_CSS, extra),
        _ => styles::PAGE_CSS.to_string(),
    };

    tracing::debug!(
        slug = %snapshot.page.slug,
        rendered = sections.len(),
        skipped = skipped.len(),
        "rendering landing page"
    );

    let doc = view! {
        <PageDocument
            title=title
            description=description
            lang=options.lang.clone()
            css=css
            sections=sections
        />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());

    RenderedPage { html, skipped }
}

/// Render a single resolved section as an HTML fragment.
pub fn render_section(section: &ResolvedSection) -> String {
    view! { <SectionView section=section.clone() /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::{BrandColors, BrandLogo, LegacyPalette};
    use crate::types::{AccountRecord, LandingPage, SectionRecord};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn section(id: &str, section_type: &str, order_index: i32, content: Value) -> SectionRecord {
        SectionRecord {
            id: id.into(),
            lp_id: "lp-1".into(),
            section_type: section_type.into(),
            order_index,
            content_json: content,
            active: true,
        }
    }

    fn snapshot(sections: Vec<SectionRecord>) -> PageSnapshot {
        PageSnapshot {
            account: AccountRecord {
                id: "acc-1".into(),
                name: "Clinica Sorriso".into(),
                branding_config: Some(BrandingConfig {
                    colors: Some(BrandColors {
                        primary: Some("#0f766e".into()),
                        secondary: Some("#f8fafc".into()),
                    }),
                    logo: Some(BrandLogo {
                        url: Some("https://cdn.example.com/logo.png".into()),
                        alt: Some("Sorriso".into()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            page: LandingPage {
                id: "lp-1".into(),
                account_id: "acc-1".into(),
                slug: "implantes".into(),
                title: "Implantes Dentarios".into(),
                active: true,
                is_homepage: true,
            },
            sections,
        }
    }

    /// Declarations of every inline `style` attribute, in document order.
    fn inline_styles(html: &str) -> Vec<Vec<String>> {
        html.split(r#"style=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|style| {
                style
                    .split(';')
                    .map(str::trim)
                    .filter(|decl| !decl.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    fn decls(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    fn hero() -> Value {
        json!({
            "title": "Sorria de novo",
            "description": "Implantes em um dia",
            "primaryButton": { "text": "Agendar", "href": "https://wa.me/5511999999999" },
            "secondaryButton": { "text": "Saiba mais", "href": "#about" },
            "image": { "src": "https://cdn.example.com/hero.jpg", "alt": "Paciente" }
        })
    }

    #[test]
    fn renders_document_shell() {
        let rendered = render_page(&snapshot(vec![]), &RenderOptions::default());

        assert!(rendered.html.starts_with("<!DOCTYPE html>"));
        assert!(rendered.html.contains(r#"<html lang="pt-BR""#));
        assert!(rendered.html.contains("<title>Implantes Dentarios</title>"));
        assert!(
            rendered
                .html
                .contains(r#"content="Implantes Dentarios - Clinica Sorriso""#)
        );
        assert!(rendered.skipped.is_empty());
    }

    #[test]
    fn sections_render_in_order_and_bad_ones_are_skipped() {
        let sections = vec![
            section("footer", "footer", 9, json!({ "copyright": "(c) 2025 Sorriso" })),
            section("faq", "faq", 3, Value::String("{not json".into())),
            section("hero", "hero", 1, hero()),
            section("banner", "banner", 2, json!({})),
        ];

        let rendered = render_page(&snapshot(sections), &RenderOptions::default());

        let hero_at = rendered.html.find("Sorria de novo").unwrap();
        let footer_at = rendered.html.find("(c) 2025 Sorriso").unwrap();
        assert!(hero_at < footer_at);

        let skipped: Vec<&str> = rendered.skipped.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(skipped, vec!["banner", "faq"]);
        assert!(!rendered.html.contains(r#"data-section-type="faq""#));
    }

    #[test]
    fn branding_colors_become_inline_styles() {
        let sections = vec![
            section("hero", "hero", 1, hero()),
            section("cta", "ctaFinal", 2, json!({
                "title": "Pronto?",
                "button": { "text": "Fale conosco", "href": "/contato" },
                "backgroundColor": "#111111"
            })),
        ];

        let html = render_page(&snapshot(sections), &RenderOptions::default()).html;

        let styles = inline_styles(&html);
        assert!(styles.contains(&decls(&["background-color:#0f766e", "color:#f8fafc"])));
        assert!(styles.contains(&decls(&["background-color:#111111", "color:#f8fafc"])));
        assert!(html.contains(r#"id="cta-final""#));
    }

    #[test]
    fn header_uses_brand_logo() {
        let sections = vec![section("header", "header", 0, json!({
            "logo": { "type": "text", "text": "Old name" },
            "navigation": [{ "label": "FAQ", "href": "#faq" }]
        }))];

        let html = render_page(&snapshot(sections), &RenderOptions::default()).html;

        assert!(html.contains(r#"src="https://cdn.example.com/logo.png""#));
        assert!(html.contains(r#"alt="Sorriso""#));
        assert!(!html.contains("Old name"));
        assert!(html.contains(r##"href="#faq""##));
    }

    #[test]
    fn legacy_palette_accounts_still_render_branded() {
        let mut snap = snapshot(vec![section("hero", "hero", 1, hero())]);
        snap.account.branding_config = None;
        snap.account.palette = Some(LegacyPalette {
            primary: Some("#123456".into()),
            secondary: Some("#abcdef".into()),
        });

        let html = render_page(&snap, &RenderOptions::default()).html;
        assert_eq!(
            inline_styles(&html),
            vec![decls(&["background-color:#123456", "color:#abcdef"])]
        );
    }

    #[test]
    fn testimonial_videos_render_as_iframes() {
        let sections = vec![section("videos", "testimonials", 4, json!({
            "title": "Depoimentos",
            "videos": [
                { "url": "https://www.youtube.com/embed/abc" },
                { "embedUrl": "" }
            ]
        }))];

        let html = render_page(&snapshot(sections), &RenderOptions::default()).html;

        assert_eq!(html.matches("<iframe").count(), 1);
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc""#));
        assert!(html.contains(r#"title="Depoimentos 1""#));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = render_page(
            &snapshot(vec![section("hero", "hero", 1, hero())]),
            &RenderOptions::default(),
        )
        .html;

        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));

        let internal = html
            .split("<a ")
            .find(|tag| tag.contains(r##"href="#about""##))
            .unwrap();
        assert!(!internal.contains("_blank"));
    }

    #[test]
    fn content_text_is_escaped() {
        let sections = vec![section("faq", "faq", 1, json!({
            "title": "<script>alert(1)</script>",
            "items": []
        }))];

        let html = render_page(&snapshot(sections), &RenderOptions::default()).html;
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;") || html.contains("&lt;script>"));
    }

    #[test]
    fn options_control_lang_and_css() {
        let options = RenderOptions {
            lang: "en".into(),
            extra_css: Some(".lp-hero { min-height: 90vh; }".into()),
        };

        let html = render_page(&snapshot(vec![]), &options).html;
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains(".lp-hero { min-height: 90vh; }"));
        assert!(html.contains("--lp-accent"));
    }

    #[test]
    fn fragment_rendering_wraps_one_section() {
        let resolved = resolve_section(
            &section("steps", "steps", 4, json!({
                "title": "Como funciona",
                "steps": [
                    { "title": "Avaliacao", "description": "Consulta inicial" },
                    { "title": "Cirurgia", "description": "No mesmo dia" }
                ],
                "button": { "text": "Agendar", "href": "tel:+5511999999999" }
            })),
            &Branding::default(),
        )
        .unwrap();

        let html = render_section(&resolved);
        assert!(html.starts_with("<section"));
        assert!(html.contains(r#"data-section-type="steps""#));
        assert!(html.contains("Cirurgia"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn every_kind_renders_with_empty_content() {
        for kind in SectionKind::ALL {
            let record = section(kind.as_str(), kind.as_str(), 1, json!({}));
            let resolved = resolve_section(&record, &Branding::default()).unwrap();
            let html = render_section(&resolved);
            assert!(
                html.contains(&format!(r#"data-section-type="{}""#, kind.as_str())),
                "{kind} did not render"
            );
        }
    }

    #[test]
    fn contact_form_falls_back_to_default_fields() {
        let sections = vec![section("contact", "contact", 1, json!({
            "title": "Fale conosco",
            "formAction": "/api/leads",
            "submitButton": { "text": "Enviar" }
        }))];

        let html = render_page(&snapshot(sections), &RenderOptions::default()).html;
        assert!(html.contains(r#"action="/api/leads""#));
        for name in ["name", "email", "phone", "message"] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(html.contains("<textarea"));
    }
}
