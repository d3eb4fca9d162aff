//! The section resolver: stored record + account branding → render-ready payload.
//!
//! Resolution is a pure function. It never touches storage, never mutates the
//! record, and holds no state between calls, so the same `(section, branding)`
//! pair always yields the same result and sections can be resolved from any
//! number of threads at once.
//!
//! Steps, in order:
//!
//! 1. `section_type` is looked up in the closed [`SectionKind`] registry.
//! 2. `content_json` is taken as-is when it's an object, treated as `{}` when
//!    `null`, and parsed when it's a string.
//! 3. Branding colours fill `backgroundColor`/`textColor` only where the
//!    content has none (content wins).
//! 4. Header sections get the branding logo forced onto `logo.src`/`logo.alt`.
//! 5. The merged object is decoded into the typed [`SectionContent`].

use serde_json::{Map, Value};
use thiserror::Error;

use crate::branding::Branding;
use crate::content::SectionContent;
use crate::kinds::SectionKind;
use crate::types::SectionRecord;

/// Why a section can't be rendered. Every variant is recoverable: the page
/// skips the section and carries on.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `content_json` is a string that isn't valid JSON
    #[error("content_json is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// `section_type` isn't in the registry
    #[error("unknown section type '{0}'")]
    UnknownSectionType(String),

    /// Content doesn't fit the payload shape of its kind
    #[error("{kind} content has the wrong shape: {reason}")]
    ContentShape {
        /// Kind being decoded
        kind: SectionKind,
        /// What didn't fit
        reason: String,
    },
}

impl ResolveError {
    /// Short machine-friendly label.
    pub fn as_label(&self) -> &'static str {
        match self {
            ResolveError::Parse(_) => "parse",
            ResolveError::UnknownSectionType(_) => "unknown-type",
            ResolveError::ContentShape { .. } => "content-shape",
        }
    }
}

/// A section ready for its renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSection {
    /// Source record id
    pub id: String,
    /// Resolved kind
    pub kind: SectionKind,
    /// Position within the page
    pub order_index: i32,
    /// Typed, branding-merged payload
    pub content: SectionContent,
}

impl ResolvedSection {
    /// Anchor id for the rendered `<section>`.
    pub fn anchor(&self) -> String {
        self.content
            .frame()
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.kind.anchor().to_string())
    }
}

/// Resolve one stored section against the account branding.
///
/// # Example
///
/// ```rust
/// use lp_renderer::{resolve_section, Branding, SectionKind};
/// use lp_renderer::types::SectionRecord;
/// use serde_json::json;
///
/// let section = SectionRecord {
///     id: "s1".into(),
///     section_type: "faq".into(),
///     content_json: json!({ "title": "Questions" }),
///     ..Default::default()
/// };
/// let branding = Branding {
///     background_color: Some("#0044cc".into()),
///     ..Default::default()
/// };
///
/// let resolved = resolve_section(&section, &branding).unwrap();
/// assert_eq!(resolved.kind, SectionKind::Faq);
/// assert_eq!(resolved.content.frame().background_color.as_deref(), Some("#0044cc"));
/// ```
pub fn resolve_section(
    section: &SectionRecord,
    branding: &Branding,
) -> Result<ResolvedSection, ResolveError> {
    let kind: SectionKind = section.section_type.parse()?;

    let mut object = content_object(kind, &section.content_json)?;
    prune_nulls(&mut object);
    merge_colors(&mut object, branding);
    if kind == SectionKind::Header {
        apply_header_logo(&mut object, branding);
    }

    let content = SectionContent::decode(kind, Value::Object(object)).map_err(|e| {
        ResolveError::ContentShape {
            kind,
            reason: e.to_string(),
        }
    })?;

    Ok(ResolvedSection {
        id: section.id.clone(),
        kind,
        order_index: section.order_index,
        content,
    })
}

/// Parse stored content into a fresh JSON object.
///
/// The stored value is cloned, never modified.
pub fn content_object(kind: SectionKind, raw: &Value) -> Result<Map<String, Value>, ResolveError> {
    let value = match raw {
        Value::String(text) => serde_json::from_str(text).map_err(ResolveError::Parse)?,
        other => other.clone(),
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ResolveError::ContentShape {
            kind,
            reason: format!("expected a JSON object, found {}", json_type(&other)),
        }),
    }
}

/// Fill missing colours from branding without overriding explicit ones.
pub fn merge_colors(object: &mut Map<String, Value>, branding: &Branding) {
    fill_if_absent(object, "backgroundColor", branding.background_color.as_deref());
    fill_if_absent(object, "textColor", branding.text_color.as_deref());
}

/// Force the branding logo onto a header payload.
///
/// The other logo fields (wordmark text, subtitle) survive; the logo becomes
/// an image logo.
pub fn apply_header_logo(object: &mut Map<String, Value>, branding: &Branding) {
    let Some(brand_logo) = &branding.logo else {
        return;
    };

    let mut logo = match object.remove("logo") {
        Some(Value::Object(existing)) => existing,
        Some(Value::String(text)) => {
            let mut fields = Map::new();
            fields.insert("text".into(), Value::String(text));
            fields
        }
        _ => Map::new(),
    };
    // `url` is an alias of `src`; both present is a duplicate field
    logo.remove("url");
    logo.insert("type".into(), Value::String("image".into()));
    logo.insert("src".into(), Value::String(brand_logo.src.clone()));
    logo.insert("alt".into(), Value::String(brand_logo.alt.clone()));

    object.insert("logo".into(), Value::Object(logo));
}

// Absent means missing, null, or an empty string.
fn fill_if_absent(object: &mut Map<String, Value>, key: &str, fallback: Option<&str>) {
    let Some(fallback) = fallback else {
        return;
    };
    let absent = match object.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if absent {
        object.insert(key.to_string(), Value::String(fallback.to_string()));
    }
}

// `null` means "not set" everywhere in stored content.
fn prune_nulls(object: &mut Map<String, Value>) {
    object.retain(|_, value| !value.is_null());
    for value in object.values_mut() {
        match value {
            Value::Object(inner) => prune_nulls(inner),
            Value::Array(items) => {
                items.retain(|item| !item.is_null());
                for item in items.iter_mut() {
                    if let Value::Object(inner) = item {
                        prune_nulls(inner);
                    }
                }
            }
            _ => {}
        }
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
