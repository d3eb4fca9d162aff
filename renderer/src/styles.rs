//! CSS for rendered landing pages.
//!
//! Section colours come from content and branding as inline styles, so this
//! sheet only sets layout, typography and neutral defaults. Extra rules can be
//! appended after it:
//!
//! ```rust
//! use lp_renderer::styles::PAGE_CSS;
//!
//! let css = format!("{PAGE_CSS}\n.lp-hero {{ min-height: 80vh; }}");
//! assert!(css.ends_with("}"));
//! ```

/// Base stylesheet inlined into every page.
pub const PAGE_CSS: &str = r#"
:root {
    --lp-accent: #0f766e;
    --lp-text: #1f2937;
    --lp-muted: #6b7280;
    --lp-surface: #ffffff;
    --lp-border: #e5e7eb;
    --lp-radius: 12px;
    --lp-max: 1120px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: var(--lp-text);
    background: var(--lp-surface);
}

img { max-width: 100%; height: auto; display: block; }
a { color: inherit; }

.lp-section { padding: 72px 0; }
.lp-header { padding: 16px 0; border-bottom: 1px solid var(--lp-border); }
.lp-footer { padding: 32px 0; }

.container { width: 100%; max-width: var(--lp-max); margin: 0 auto; padding: 0 24px; }
.container.narrow { max-width: 760px; }
.centered { text-align: center; justify-content: center; }

.split {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 48px;
    align-items: center;
}

.section-title { font-size: 2rem; line-height: 1.2; margin: 0 0 16px; }
.section-subtitle { color: var(--lp-muted); margin: 0 0 32px; }
.section-text { margin: 0 0 24px; white-space: pre-line; }
.section-image { border-radius: var(--lp-radius); }

.site-header { display: flex; align-items: center; justify-content: space-between; gap: 24px; }
.brand { display: flex; flex-direction: column; text-decoration: none; }
.logo-img { max-height: 48px; width: auto; }
.logo-text { font-weight: 700; font-size: 1.25rem; }
.logo-subtitle { font-size: 0.8rem; color: var(--lp-muted); }
.site-nav { display: flex; gap: 20px; flex-wrap: wrap; }
.nav-link { text-decoration: none; }
.header-phone { display: inline-flex; align-items: center; gap: 6px; font-weight: 600; text-decoration: none; }

.hero-title { font-size: clamp(2rem, 5vw, 3.25rem); line-height: 1.1; margin: 0 0 20px; }
.hero-description { font-size: 1.15rem; margin: 0 0 32px; }
.hero-image { border-radius: var(--lp-radius); }

.actions { display: flex; gap: 12px; flex-wrap: wrap; margin-top: 24px; }
.btn {
    display: inline-block;
    padding: 14px 28px;
    border-radius: 999px;
    font-weight: 600;
    text-decoration: none;
    border: 2px solid var(--lp-accent);
}
.btn-primary { background: var(--lp-accent); color: #ffffff; }
.btn-secondary { background: transparent; color: var(--lp-accent); }

.checklist { list-style: none; padding: 0; margin: 0 0 24px; }
.checklist li { display: flex; gap: 10px; align-items: flex-start; margin-bottom: 10px; }
.icon-accent { color: var(--lp-accent); flex-shrink: 0; margin-top: 4px; }
.item-icon { width: 18px; text-align: center; }

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
}
.stack { display: grid; gap: 16px; }
.card {
    padding: 24px;
    border: 1px solid var(--lp-border);
    border-radius: var(--lp-radius);
    background: var(--lp-surface);
    color: var(--lp-text);
}
.card-icon { font-size: 1.75rem; margin-bottom: 8px; }
.card-title { font-size: 1.15rem; margin: 0 0 8px; }
.card-text { margin: 0; color: var(--lp-muted); }

.steps { list-style: none; padding: 0; display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.step-number {
    display: inline-flex;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    align-items: center;
    justify-content: center;
    background: var(--lp-accent);
    color: #ffffff;
    font-weight: 700;
    margin-bottom: 12px;
}

.video-grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.video-frame { position: relative; padding-top: 56.25%; border-radius: var(--lp-radius); overflow: hidden; }
.video-frame iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }

.faq-list { display: grid; gap: 12px; }
.faq-item { border: 1px solid var(--lp-border); border-radius: var(--lp-radius); padding: 16px 20px; }
.faq-item summary { display: flex; justify-content: space-between; align-items: center; cursor: pointer; font-weight: 600; list-style: none; }
.faq-item[open] .faq-caret { transform: rotate(180deg); }
.faq-answer { margin: 12px 0 0; white-space: pre-line; }

.gallery-grid { display: grid; gap: 16px; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); }
.gallery-image { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: var(--lp-radius); }

.plan { display: flex; flex-direction: column; gap: 12px; }
.plan-highlighted { border-color: var(--lp-accent); box-shadow: 0 12px 32px rgba(15, 118, 110, 0.15); }
.plan-price { font-size: 2rem; font-weight: 700; margin: 0; }
.plan-period { font-size: 1rem; color: var(--lp-muted); font-weight: 400; }

.contact-form { display: grid; gap: 16px; }
.form-field { display: grid; gap: 6px; font-weight: 600; }
.form-field input, .form-field textarea {
    font: inherit;
    padding: 12px 14px;
    border: 1px solid var(--lp-border);
    border-radius: 8px;
}

.site-footer { display: flex; flex-wrap: wrap; gap: 16px 32px; align-items: center; justify-content: space-between; font-size: 0.9rem; }
.footer-copyright { margin: 0; }

@media (max-width: 720px) {
    .lp-section { padding: 48px 0; }
    .site-header { flex-wrap: wrap; }
    .site-nav { display: none; }
}
"#;
