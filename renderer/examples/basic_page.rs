//! Render a small landing page to HTML.
//!
//! Run with: `cargo run --example basic_page`

use lp_renderer::branding::{BrandColors, BrandLogo, BrandingConfig};
use lp_renderer::types::{AccountRecord, LandingPage, PageSnapshot, SectionRecord};
use lp_renderer::{RenderOptions, render_page};
use serde_json::json;

fn section(id: &str, section_type: &str, order_index: i32, content: serde_json::Value) -> SectionRecord {
    SectionRecord {
        id: id.into(),
        lp_id: "lp-demo".into(),
        section_type: section_type.into(),
        order_index,
        content_json: content,
        active: true,
    }
}

fn main() {
    let snapshot = PageSnapshot {
        account: AccountRecord {
            id: "acc-demo".into(),
            name: "Demo Dental".into(),
            branding_config: Some(BrandingConfig {
                colors: Some(BrandColors {
                    primary: Some("#f0fdfa".into()),
                    secondary: Some("#134e4a".into()),
                }),
                logo: Some(BrandLogo {
                    url: Some("https://placehold.co/160x48".into()),
                    alt: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
        page: LandingPage {
            id: "lp-demo".into(),
            account_id: "acc-demo".into(),
            slug: "demo".into(),
            title: "Same-day implants".into(),
            active: true,
            is_homepage: true,
        },
        sections: vec![
            section("header", "header", 0, json!({
                "navigation": [{ "label": "FAQ", "href": "#faq" }],
                "phone": { "display": "(555) 010-0199", "link": "tel:+15550100199" }
            })),
            section("hero", "hero", 1, json!({
                "title": "Smile again, today",
                "description": "Implants placed and restored in a single visit.",
                "primaryButton": { "text": "Book a visit", "href": "https://wa.me/15550100199" },
                "image": { "src": "https://placehold.co/640x480", "alt": "Patient smiling" }
            })),
            section("faq", "faq", 2, json!({
                "title": "Questions",
                "items": [{ "question": "Does it hurt?", "answer": "Local anaesthesia keeps it comfortable." }],
                "backgroundColor": "#ffffff"
            })),
            section("footer", "footer", 3, json!({ "copyright": "(c) 2025 Demo Dental" })),
        ],
    };

    let rendered = render_page(&snapshot, &RenderOptions { lang: "en".into(), ..Default::default() });

    let output_path = "basic_page.html";
    if let Err(e) = std::fs::write(output_path, &rendered.html) {
        eprintln!("Failed to write page: {e}");
        std::process::exit(1);
    }

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes, {} section(s) skipped", rendered.html.len(), rendered.skipped.len());
}
