//! Ingestion-time validation of section content.
//!
//! The resolver is lenient: it fills defaults and only rejects content it
//! can't decode at all. Strictness lives here, at the point where sections are
//! authored or saved. Every kind has a field table (the same one an editor
//! form is built from), and [`validate_content`] checks a payload against it
//! before anything is stored.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::content::SectionContent;
use crate::kinds::SectionKind;
use crate::resolve::{ResolveError, content_object, json_type};
use crate::types::SectionRecord;

/// Input type of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    /// Link target or image location
    Url,
    /// CSS hex colour
    Color,
    /// Repeated items
    List,
}

/// One editable field of a section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionField {
    /// Dotted JSON path, e.g. `primaryButton.href`
    pub path: &'static str,
    /// Form label
    pub label: &'static str,
    /// Input type
    pub kind: FieldKind,
    /// Must be present and non-empty
    pub required: bool,
}

const fn field(path: &'static str, label: &'static str, kind: FieldKind, required: bool) -> SectionField {
    SectionField {
        path,
        label,
        kind,
        required,
    }
}

use FieldKind::{Color, List, Text, Textarea, Url};

const BACKGROUND: SectionField = field("backgroundColor", "Background color", Color, false);
const TEXT_COLOR: SectionField = field("textColor", "Text color", Color, false);

const HEADER_FIELDS: &[SectionField] = &[
    BACKGROUND,
    TEXT_COLOR,
    field("logo.text", "Logo text", Text, false),
    field("logo.subtitle", "Logo subtitle", Text, false),
    field("navigation", "Navigation links", List, false),
    field("phone.display", "Phone (display)", Text, false),
    field("phone.link", "Phone (link)", Url, false),
];

const HERO_FIELDS: &[SectionField] = &[
    field("title", "Headline", Text, true),
    field("description", "Description", Textarea, true),
    field("primaryButton.text", "Primary button text", Text, true),
    field("primaryButton.href", "Primary button link", Url, true),
    field("secondaryButton.text", "Secondary button text", Text, false),
    field("secondaryButton.href", "Secondary button link", Url, false),
    field("image.src", "Image URL", Url, true),
    field("image.alt", "Image alt text", Text, true),
    BACKGROUND,
    TEXT_COLOR,
];

const ABOUT_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("description", "Description", Textarea, true),
    field("image.src", "Image URL", Url, false),
    field("image.alt", "Image alt text", Text, false),
    field("button.text", "Button text", Text, false),
    field("button.href", "Button link", Url, false),
    BACKGROUND,
    TEXT_COLOR,
];

const SERVICES_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("image.src", "Image URL", Url, true),
    field("image.alt", "Image alt text", Text, true),
    field("button.text", "Button text", Text, false),
    field("button.href", "Button link", Url, false),
    field("items", "Services", List, true),
    BACKGROUND,
    TEXT_COLOR,
];

const BENEFITS_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("items", "Benefits", List, true),
    BACKGROUND,
    TEXT_COLOR,
];

const TECHNOLOGY_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("items", "Highlights", List, false),
    field("image.src", "Image URL", Url, true),
    field("image.alt", "Image alt text", Text, true),
    field("button.text", "Button text", Text, true),
    field("button.href", "Button link", Url, true),
    BACKGROUND,
    TEXT_COLOR,
];

const STEPS_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("steps", "Steps", List, true),
    field("button.text", "Button text", Text, true),
    field("button.href", "Button link", Url, true),
    BACKGROUND,
    TEXT_COLOR,
];

const TESTIMONIALS_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("videos", "Videos", List, true),
    BACKGROUND,
    TEXT_COLOR,
];

const FAQ_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("items", "Questions", List, true),
    BACKGROUND,
    TEXT_COLOR,
];

const GALLERY_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("subtitle", "Subtitle", Text, false),
    field("images", "Images", List, true),
    BACKGROUND,
    TEXT_COLOR,
];

const PRICING_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("subtitle", "Subtitle", Text, false),
    field("plans", "Plans", List, true),
    BACKGROUND,
    TEXT_COLOR,
];

const CONTACT_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("subtitle", "Subtitle", Text, false),
    field("formAction", "Form action URL", Url, true),
    field("fields", "Form fields", List, false),
    field("submitButton.text", "Submit button text", Text, true),
    BACKGROUND,
    TEXT_COLOR,
];

const CTA_FINAL_FIELDS: &[SectionField] = &[
    field("title", "Title", Text, true),
    field("subtitle", "Subtitle", Text, false),
    field("button.text", "Button text", Text, true),
    field("button.href", "Button link", Url, true),
    BACKGROUND,
    TEXT_COLOR,
];

const FOOTER_FIELDS: &[SectionField] = &[
    field("instagram.url", "Instagram URL", Url, true),
    field("instagram.text", "Instagram text", Text, true),
    field("copyright", "Copyright", Text, true),
    field("legalLink.text", "Legal link text", Text, false),
    field("legalLink.href", "Legal link URL", Url, false),
    BACKGROUND,
    TEXT_COLOR,
];

/// Editable fields of a section kind, in form order.
pub fn section_fields(kind: SectionKind) -> &'static [SectionField] {
    match kind {
        SectionKind::Header => HEADER_FIELDS,
        SectionKind::Hero => HERO_FIELDS,
        SectionKind::About => ABOUT_FIELDS,
        SectionKind::Services => SERVICES_FIELDS,
        SectionKind::Benefits => BENEFITS_FIELDS,
        SectionKind::Technology => TECHNOLOGY_FIELDS,
        SectionKind::Steps => STEPS_FIELDS,
        SectionKind::Testimonials => TESTIMONIALS_FIELDS,
        SectionKind::Faq => FAQ_FIELDS,
        SectionKind::Gallery => GALLERY_FIELDS,
        SectionKind::Pricing => PRICING_FIELDS,
        SectionKind::Contact => CONTACT_FIELDS,
        SectionKind::CtaFinal => CTA_FINAL_FIELDS,
        SectionKind::Footer => FOOTER_FIELDS,
    }
}

/// What's wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Required and missing, null, or empty
    Missing,
    /// Expected a string
    NotText,
    /// Expected an array
    NotList,
    /// Not a `#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa` colour
    InvalidColor(String),
    /// Not an accepted link target
    InvalidUrl(String),
    /// `section_type` isn't a known kind
    UnknownType,
    /// Content couldn't be parsed or decoded at all
    Malformed(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => f.write_str("required field is missing"),
            Problem::NotText => f.write_str("expected text"),
            Problem::NotList => f.write_str("expected a list"),
            Problem::InvalidColor(v) => write!(f, "'{v}' is not a hex colour"),
            Problem::InvalidUrl(v) => write!(f, "'{v}' is not a valid link"),
            Problem::UnknownType => f.write_str("unknown section type"),
            Problem::Malformed(reason) => write!(f, "malformed content: {reason}"),
        }
    }
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path of the field (`section_type` / empty for whole-record problems)
    pub path: String,
    /// What's wrong
    pub problem: Problem,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.path, self.problem)
        }
    }
}

/// Content rejected at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{section_type} content is invalid: {}", join_issues(.issues))]
pub struct ValidationError {
    /// Stored type name, verbatim
    pub section_type: String,
    /// Every failed check, in field order
    pub issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    fn single(section_type: &str, path: &str, problem: Problem) -> Self {
        Self {
            section_type: section_type.to_string(),
            issues: vec![FieldIssue {
                path: path.to_string(),
                problem,
            }],
        }
    }
}

/// Check a content object against the field table of `kind` and decode it.
///
/// # Example
///
/// ```rust
/// use lp_renderer::validate::{validate_content, Problem};
/// use lp_renderer::SectionKind;
/// use serde_json::json;
///
/// let err = validate_content(SectionKind::CtaFinal, &json!({ "title": "Ready?" })).unwrap_err();
/// let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
/// assert_eq!(paths, ["button.text", "button.href"]);
/// assert_eq!(err.issues[0].problem, Problem::Missing);
/// ```
pub fn validate_content(kind: SectionKind, content: &Value) -> Result<SectionContent, ValidationError> {
    let Value::Object(object) = content else {
        return Err(ValidationError::single(
            kind.as_str(),
            "",
            Problem::Malformed(format!("expected a JSON object, found {}", json_type(content))),
        ));
    };

    let issues: Vec<FieldIssue> = section_fields(kind)
        .iter()
        .filter_map(|f| check_field(object, f).map(|problem| FieldIssue {
            path: f.path.to_string(),
            problem,
        }))
        .collect();

    if !issues.is_empty() {
        return Err(ValidationError {
            section_type: kind.as_str().to_string(),
            issues,
        });
    }

    SectionContent::decode(kind, content.clone())
        .map_err(|e| ValidationError::single(kind.as_str(), "", Problem::Malformed(e.to_string())))
}

/// Validate a whole stored record: type, content encoding, then fields.
pub fn validate_section(section: &SectionRecord) -> Result<SectionContent, ValidationError> {
    let kind: SectionKind = section.section_type.parse().map_err(|_| {
        ValidationError::single(&section.section_type, "section_type", Problem::UnknownType)
    })?;

    let object = content_object(kind, &section.content_json).map_err(|e| {
        let reason = match e {
            ResolveError::Parse(inner) => inner.to_string(),
            other => other.to_string(),
        };
        ValidationError::single(kind.as_str(), "", Problem::Malformed(reason))
    })?;

    validate_content(kind, &Value::Object(object))
}

fn check_field(object: &Map<String, Value>, field: &SectionField) -> Option<Problem> {
    let value = lookup(object, field.path);

    let value = match value {
        None | Some(Value::Null) => return field.required.then_some(Problem::Missing),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return field.required.then_some(Problem::Missing);
        }
        Some(v) => v,
    };

    match field.kind {
        FieldKind::List => match value {
            Value::Array(items) if items.is_empty() && field.required => Some(Problem::Missing),
            Value::Array(_) => None,
            _ => Some(Problem::NotList),
        },
        FieldKind::Text | FieldKind::Textarea => (!value.is_string()).then_some(Problem::NotText),
        FieldKind::Url => match value.as_str() {
            None => Some(Problem::NotText),
            Some(url) if !is_valid_link(url) => Some(Problem::InvalidUrl(url.to_string())),
            Some(_) => None,
        },
        FieldKind::Color => match value.as_str() {
            None => Some(Problem::NotText),
            Some(color) if !is_hex_color(color) => Some(Problem::InvalidColor(color.to_string())),
            Some(_) => None,
        },
    }
}

fn lookup<'a>(object: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = object.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Absolute http(s), root-relative, fragment, `tel:` or `mailto:` targets.
pub fn is_valid_link(value: &str) -> bool {
    const PREFIXES: [&str; 6] = ["https://", "http://", "/", "#", "tel:", "mailto:"];

    !value.chars().any(char::is_whitespace)
        && PREFIXES
            .iter()
            .any(|prefix| value.len() > prefix.len() && value.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn issue(path: &str, problem: Problem) -> FieldIssue {
        FieldIssue {
            path: path.into(),
            problem,
        }
    }

    #[test]
    fn every_kind_has_a_field_table() {
        for kind in SectionKind::ALL {
            assert!(!section_fields(kind).is_empty(), "{kind} has no fields");
        }
    }

    #[test]
    fn complete_hero_decodes() {
        let content = json!({
            "title": "Implants",
            "description": "Same-day implants",
            "primaryButton": { "text": "Book", "href": "https://wa.me/5511999999999" },
            "image": { "src": "https://cdn.example.com/hero.jpg", "alt": "Patient" },
            "backgroundColor": "#fafafa"
        });

        let decoded = validate_content(SectionKind::Hero, &content).unwrap();
        assert_eq!(decoded.kind(), SectionKind::Hero);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let err = validate_content(SectionKind::Hero, &json!({ "title": "Only a title" })).unwrap_err();

        assert_eq!(
            err.issues,
            vec![
                issue("description", Problem::Missing),
                issue("primaryButton.text", Problem::Missing),
                issue("primaryButton.href", Problem::Missing),
                issue("image.src", Problem::Missing),
                issue("image.alt", Problem::Missing),
            ]
        );
        assert!(err.to_string().starts_with("hero content is invalid: description"));
    }

    #[test]
    fn bad_colors_links_and_types_are_flagged() {
        let content = json!({
            "title": "FAQ",
            "items": "not a list",
            "backgroundColor": "blue",
            "textColor": 12
        });
        let err = validate_content(SectionKind::Faq, &content).unwrap_err();

        assert_eq!(
            err.issues,
            vec![
                issue("items", Problem::NotList),
                issue("backgroundColor", Problem::InvalidColor("blue".into())),
                issue("textColor", Problem::NotText),
            ]
        );

        let content = json!({
            "title": "Ready?",
            "button": { "text": "Go", "href": "javascript:alert(1)" }
        });
        let err = validate_content(SectionKind::CtaFinal, &content).unwrap_err();
        assert_eq!(
            err.issues,
            vec![issue("button.href", Problem::InvalidUrl("javascript:alert(1)".into()))]
        );
    }

    #[test]
    fn empty_required_list_counts_as_missing() {
        let err = validate_content(SectionKind::Gallery, &json!({ "title": "Work", "images": [] }))
            .unwrap_err();
        assert_eq!(err.issues, vec![issue("images", Problem::Missing)]);
    }

    #[test]
    fn optional_fields_may_be_absent_or_blank() {
        let content = json!({
            "title": "About us",
            "description": "Since 1999",
            "button": { "text": "", "href": "" }
        });
        assert!(validate_content(SectionKind::About, &content).is_ok());
    }

    #[test]
    fn shape_errors_after_field_checks_are_malformed() {
        let content = json!({
            "title": "FAQ",
            "items": [{ "question": 1, "answer": "A" }]
        });
        let err = validate_content(SectionKind::Faq, &content).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert!(matches!(err.issues[0].problem, Problem::Malformed(_)));
    }

    #[test]
    fn records_with_unknown_type_or_bad_json_are_rejected() {
        let record = SectionRecord {
            id: "s1".into(),
            section_type: "banner".into(),
            content_json: json!({}),
            ..Default::default()
        };
        let err = validate_section(&record).unwrap_err();
        assert_eq!(err.issues, vec![issue("section_type", Problem::UnknownType)]);

        let record = SectionRecord {
            id: "s2".into(),
            section_type: "faq".into(),
            content_json: Value::String("{bad json".into()),
            ..Default::default()
        };
        let err = validate_section(&record).unwrap_err();
        assert!(matches!(err.issues[0].problem, Problem::Malformed(_)));
    }

    #[test]
    fn string_encoded_records_validate_like_objects() {
        let record = SectionRecord {
            id: "s3".into(),
            section_type: "footer".into(),
            content_json: Value::String(
                r#"{"instagram":{"url":"https://instagram.com/clinic","text":"@clinic"},"copyright":"(c) 2025 Clinic"}"#.into(),
            ),
            ..Default::default()
        };
        assert!(validate_section(&record).is_ok());
    }

    #[test]
    fn color_and_link_rules() {
        for ok in ["#fff", "#ffff", "#0044cc", "#0044ccff"] {
            assert!(is_hex_color(ok), "{ok}");
        }
        for bad in ["fff", "#ff", "#gggggg", "#0044cc0"] {
            assert!(!is_hex_color(bad), "{bad}");
        }

        for ok in ["https://wa.me/55", "/contato", "#faq", "tel:+5511", "mailto:a@b.c"] {
            assert!(is_valid_link(ok), "{ok}");
        }
        for bad in ["#", "/", "ftp://x", "https://a b", "javascript:void(0)"] {
            assert!(!is_valid_link(bad), "{bad}");
        }
    }
}
