//! Page-level ordering and partial-failure tolerance.
//!
//! A page renders its `active` sections in ascending `order_index`. Each one is
//! resolved on its own; a section that can't be resolved is logged and skipped
//! and the rest of the page still renders.

use crate::branding::Branding;
use crate::resolve::{ResolveError, ResolvedSection, resolve_section};
use crate::types::SectionRecord;

/// A section left out of the page, with the reason.
#[derive(Debug)]
pub struct SkippedSection {
    /// Source record id
    pub id: String,
    /// Stored type name, verbatim
    pub section_type: String,
    /// Position it would have had
    pub order_index: i32,
    /// Why it was skipped
    pub error: ResolveError,
}

/// All renderable sections of a page, in render order.
#[derive(Debug, Default)]
pub struct ResolvedPage {
    /// Sections to render, ascending by `order_index`
    pub sections: Vec<ResolvedSection>,
    /// Sections that couldn't be resolved, in the same order
    pub skipped: Vec<SkippedSection>,
}

impl ResolvedPage {
    /// True when every active section resolved.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Active sections sorted for rendering.
///
/// Ties on `order_index` (which the store should never produce) fall back to
/// `id` so the output is still deterministic.
pub fn ordered_active(sections: &[SectionRecord]) -> Vec<&SectionRecord> {
    let mut active: Vec<&SectionRecord> = sections.iter().filter(|s| s.active).collect();
    active.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then_with(|| a.id.cmp(&b.id))
    });
    active
}

/// Resolve every active section of a page.
///
/// # Example
///
/// ```rust
/// use lp_renderer::{resolve_page, Branding};
/// use lp_renderer::types::SectionRecord;
/// use serde_json::json;
///
/// let sections = vec![
///     SectionRecord { id: "a".into(), section_type: "faq".into(), order_index: 2,
///                     content_json: json!({}), active: true, ..Default::default() },
///     SectionRecord { id: "b".into(), section_type: "banner".into(), order_index: 1,
///                     content_json: json!({}), active: true, ..Default::default() },
/// ];
///
/// let page = resolve_page(&sections, &Branding::default());
/// assert_eq!(page.sections.len(), 1);
/// assert_eq!(page.skipped[0].id, "b");
/// ```
pub fn resolve_page(sections: &[SectionRecord], branding: &Branding) -> ResolvedPage {
    let mut page = ResolvedPage::default();

    for section in ordered_active(sections) {
        match resolve_section(section, branding) {
            Ok(resolved) => page.sections.push(resolved),
            Err(error) => {
                tracing::warn!(
                    section = %section.id,
                    section_type = %section.section_type,
                    order_index = section.order_index,
                    reason = error.as_label(),
                    "skipping unrenderable section: {error}"
                );
                page.skipped.push(SkippedSection {
                    id: section.id.clone(),
                    section_type: section.section_type.clone(),
                    order_index: section.order_index,
                    error,
                });
            }
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::SectionKind;
    use serde_json::{Value, json};

    fn record(id: &str, section_type: &str, order_index: i32, active: bool, content: Value) -> SectionRecord {
        SectionRecord {
            id: id.into(),
            lp_id: "lp-1".into(),
            section_type: section_type.into(),
            order_index,
            content_json: content,
            active,
        }
    }

    #[test]
    fn only_active_sections_in_ascending_order() {
        let sections = vec![
            record("three", "faq", 3, true, json!({})),
            record("one", "hero", 1, true, json!({})),
            record("two", "about", 2, false, json!({})),
        ];

        let page = resolve_page(&sections, &Branding::default());
        let order: Vec<i32> = page.sections.iter().map(|s| s.order_index).collect();
        assert_eq!(order, vec![1, 3]);
        assert!(page.is_complete());
    }

    #[test]
    fn bad_sections_are_skipped_not_fatal() {
        let sections = vec![
            record("hero", "hero", 1, true, json!({ "title": "Hi" })),
            record("broken", "faq", 2, true, Value::String("{bad json".into())),
            record("mystery", "banner", 3, true, json!({})),
            record("footer", "footer", 4, true, json!({ "copyright": "(c) 2025" })),
        ];

        let page = resolve_page(&sections, &Branding::default());

        let kinds: Vec<SectionKind> = page.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Hero, SectionKind::Footer]);

        assert_eq!(page.skipped.len(), 2);
        assert_eq!(page.skipped[0].id, "broken");
        assert!(matches!(page.skipped[0].error, ResolveError::Parse(_)));
        assert_eq!(page.skipped[1].section_type, "banner");
        assert!(matches!(
            page.skipped[1].error,
            ResolveError::UnknownSectionType(_)
        ));
    }

    #[test]
    fn inactive_broken_sections_are_not_reported() {
        let sections = vec![record("off", "banner", 1, false, json!({}))];
        let page = resolve_page(&sections, &Branding::default());
        assert!(page.sections.is_empty());
        assert!(page.is_complete());
    }

    #[test]
    fn ties_are_broken_by_id() {
        let sections = vec![
            record("b", "faq", 1, true, json!({})),
            record("a", "hero", 1, true, json!({})),
        ];
        let ids: Vec<&str> = ordered_active(&sections).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn sections_resolve_independently_across_threads() {
        let sections: Vec<SectionRecord> = (0..8)
            .map(|i| record(&format!("s{i}"), "faq", i, true, json!({ "title": format!("Q{i}") })))
            .collect();
        let branding = Branding {
            text_color: Some("#333333".into()),
            ..Default::default()
        };

        let sequential = resolve_page(&sections, &branding);

        let shared = &branding;
        let parallel: Vec<ResolvedSection> = std::thread::scope(|scope| {
            let handles: Vec<_> = sections
                .iter()
                .map(|section| scope.spawn(move || resolve_section(section, shared).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential.sections, parallel);
    }
}
