//! Stored record types for landing pages.
//!
//! These mirror the rows the persistence layer hands us. They're designed to be:
//!
//! - **Serializable** - the same JSON the store produces round-trips through serde
//! - **Tolerant** - historical field names and loosely-typed branding blobs decode
//! - **Default-able** - build partial records in tests with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use lp_renderer::types::{PageSnapshot, SectionRecord};
//! use serde_json::json;
//!
//! let section = SectionRecord {
//!     id: "s1".into(),
//!     lp_id: "lp1".into(),
//!     section_type: "hero".into(),
//!     order_index: 1,
//!     content_json: json!({ "title": "Hello" }),
//!     active: true,
//! };
//!
//! let snapshot = PageSnapshot {
//!     sections: vec![section],
//!     ..Default::default()
//! };
//! assert_eq!(snapshot.sections.len(), 1);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::branding::{BrandingConfig, LegacyPalette};

/// One configurable content block of a landing page.
///
/// `content_json` is whatever the authoring tool stored: usually an object,
/// sometimes `null`, and in older rows a string holding serialized JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section identifier
    pub id: String,
    /// Owning landing page
    pub lp_id: String,
    /// Stored type name, e.g. `"hero"` or `"ctaFinal"`
    pub section_type: String,
    /// Position within the page (ascending render order)
    #[serde(alias = "order")]
    pub order_index: i32,
    /// Raw content payload
    #[serde(default)]
    pub content_json: Value,
    /// Inactive sections are never rendered
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Account (tenant) row, carrying either branding shape.
///
/// `palette` + `logo_url` is the legacy layout; `branding_config` is the
/// canonical one. Blobs of the wrong JSON type decode as `None` instead of
/// failing the whole record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account identifier
    pub id: String,
    /// Display name (also the fallback logo alt text)
    #[serde(default)]
    pub name: String,
    /// Legacy flat palette
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub palette: Option<LegacyPalette>,
    /// Legacy logo location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Canonical branding configuration
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_config: Option<BrandingConfig>,
}

/// Landing page row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingPage {
    /// Page identifier
    pub id: String,
    /// Owning account
    pub account_id: String,
    /// Public URL slug
    pub slug: String,
    /// Page title (also used for `<title>`)
    #[serde(default)]
    pub title: String,
    /// Unpublished pages are not served by slug
    #[serde(default = "default_true")]
    pub active: bool,
    /// Whether this page is the account's homepage
    #[serde(default)]
    pub is_homepage: bool,
}

/// Everything needed to render one page, as exported from the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Owning account with its branding
    pub account: AccountRecord,
    /// The page itself
    pub page: LandingPage,
    /// All sections of the page, in storage order
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
}

/// Decode an optional object, treating anything that doesn't fit as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_accepts_historical_order_field() {
        let section: SectionRecord = serde_json::from_value(json!({
            "id": "s1",
            "lp_id": "lp1",
            "section_type": "faq",
            "order": 4,
            "content_json": {}
        }))
        .unwrap();

        assert_eq!(section.order_index, 4);
        assert!(section.active, "active defaults to true");
    }

    #[test]
    fn section_keeps_string_content_verbatim() {
        let section: SectionRecord = serde_json::from_value(json!({
            "id": "s1",
            "lp_id": "lp1",
            "section_type": "hero",
            "order_index": 1,
            "content_json": "{\"title\":\"Hi\"}",
            "active": false
        }))
        .unwrap();

        assert_eq!(section.content_json, Value::String("{\"title\":\"Hi\"}".into()));
        assert!(!section.active);
    }

    #[test]
    fn account_ignores_non_object_branding() {
        let account: AccountRecord = serde_json::from_value(json!({
            "id": "a1",
            "name": "Acme",
            "palette": "blue",
            "branding_config": ["nope"]
        }))
        .unwrap();

        assert!(account.palette.is_none());
        assert!(account.branding_config.is_none());
    }

    #[test]
    fn account_reads_both_branding_shapes() {
        let account: AccountRecord = serde_json::from_value(json!({
            "id": "a1",
            "name": "Acme",
            "palette": { "primary": "#111111" },
            "logo_url": "https://cdn.example.com/logo.png",
            "branding_config": { "colors": { "secondary": "#eeeeee" } }
        }))
        .unwrap();

        assert_eq!(
            account.palette.and_then(|p| p.primary).as_deref(),
            Some("#111111")
        );
        assert_eq!(
            account
                .branding_config
                .and_then(|b| b.colors)
                .and_then(|c| c.secondary)
                .as_deref(),
            Some("#eeeeee")
        );
    }
}
