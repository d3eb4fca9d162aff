//! The closed registry of section types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resolve::ResolveError;

/// Every section type a landing page can contain.
///
/// The stored name (see [`SectionKind::as_str`]) is matched exactly; anything
/// else is an unknown type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    /// Top bar with logo, navigation and phone
    Header,
    /// Headline block with call-to-action buttons
    Hero,
    /// About-us text with optional image
    About,
    /// Service list next to an image
    Services,
    /// Icon grid of benefits
    Benefits,
    /// Technology highlights with image and button
    Technology,
    /// Numbered how-it-works steps
    Steps,
    /// Embedded video testimonials
    Testimonials,
    /// Question/answer list
    Faq,
    /// Image grid
    Gallery,
    /// Plan comparison cards
    Pricing,
    /// Lead capture form
    Contact,
    /// Closing call-to-action
    CtaFinal,
    /// Page footer
    Footer,
}

impl SectionKind {
    /// All kinds, in the order the authoring tool lists them.
    pub const ALL: [SectionKind; 14] = [
        SectionKind::Header,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Benefits,
        SectionKind::Technology,
        SectionKind::Steps,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Gallery,
        SectionKind::Pricing,
        SectionKind::Contact,
        SectionKind::CtaFinal,
        SectionKind::Footer,
    ];

    /// Stored `section_type` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Benefits => "benefits",
            SectionKind::Technology => "technology",
            SectionKind::Steps => "steps",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Faq => "faq",
            SectionKind::Gallery => "gallery",
            SectionKind::Pricing => "pricing",
            SectionKind::Contact => "contact",
            SectionKind::CtaFinal => "ctaFinal",
            SectionKind::Footer => "footer",
        }
    }

    /// Human-readable name for editor UIs and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::Header => "Header",
            SectionKind::Hero => "Hero",
            SectionKind::About => "About",
            SectionKind::Services => "Services",
            SectionKind::Benefits => "Benefits",
            SectionKind::Technology => "Technology",
            SectionKind::Steps => "Steps",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Faq => "FAQ",
            SectionKind::Gallery => "Gallery",
            SectionKind::Pricing => "Pricing",
            SectionKind::Contact => "Contact",
            SectionKind::CtaFinal => "Final call to action",
            SectionKind::Footer => "Footer",
        }
    }

    /// Default anchor id, used when the content doesn't carry one.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionKind::CtaFinal => "cta-final",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ResolveError::UnknownSectionType(s.to_string()))
    }
}
