//! Strongly-typed section payloads.
//!
//! Each section kind has its own struct; [`SectionContent`] is the closed sum
//! over all of them. Field names follow the stored camelCase JSON.
//!
//! Decoding is deliberately forgiving about *missing* fields (they default, the
//! ingestion validator is what enforces required fields) and accepts the field
//! names older content revisions used. It is strict about JSON *types*: a
//! number where a list belongs is a decode error.
//!
//! # Example
//!
//! ```rust
//! use lp_renderer::content::SectionContent;
//! use lp_renderer::SectionKind;
//! use serde_json::json;
//!
//! let content = SectionContent::decode(
//!     SectionKind::Faq,
//!     json!({ "title": "Questions", "questions": [{ "question": "Q?", "answer": "A." }] }),
//! )
//! .unwrap();
//!
//! match content {
//!     SectionContent::Faq(faq) => assert_eq!(faq.items.len(), 1),
//!     _ => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::kinds::SectionKind;

/// Fields every section shares: anchor id and colours.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionFrame {
    /// Anchor id (`<section id>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// CSS background colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// CSS text colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// A call-to-action link rendered as a button.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    /// Label
    pub text: String,
    /// Target
    #[serde(alias = "url", alias = "link")]
    pub href: String,
    /// Style hint (`primary`, `secondary`, `outline`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl Button {
    /// External targets open in a new tab.
    pub fn is_external(&self) -> bool {
        is_external(&self.href)
    }
}

/// True for absolute http(s) targets.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

/// An image reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image location
    #[serde(alias = "url")]
    pub src: String,
    /// Alt text
    pub alt: String,
}

/// Plain text link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Label
    pub text: String,
    /// Target
    #[serde(alias = "url", alias = "link")]
    pub href: String,
}

/// Whether a header logo is rendered as text or as an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoType {
    /// Text wordmark with optional subtitle
    #[default]
    Text,
    /// `<img>` logo
    Image,
}

/// Header logo.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Logo {
    /// Text or image
    #[serde(rename = "type")]
    pub logo_type: LogoType,
    /// Wordmark text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Line under the wordmark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Image location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Image alt text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct LogoFields {
    #[serde(rename = "type")]
    logo_type: Option<LogoType>,
    text: Option<String>,
    subtitle: Option<String>,
    #[serde(alias = "url")]
    src: Option<String>,
    alt: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogoRepr {
    Bare(String),
    Full(LogoFields),
}

// Early headers stored the logo as a bare wordmark string, and some stored
// objects without `type`; an image src with no type means an image logo.
impl<'de> Deserialize<'de> for Logo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match LogoRepr::deserialize(deserializer)? {
            LogoRepr::Bare(text) => Logo {
                text: Some(text),
                ..Default::default()
            },
            LogoRepr::Full(fields) => {
                let logo_type = fields.logo_type.unwrap_or(if fields.src.is_some() {
                    LogoType::Image
                } else {
                    LogoType::Text
                });
                Logo {
                    logo_type,
                    text: fields.text,
                    subtitle: fields.subtitle,
                    src: fields.src,
                    alt: fields.alt,
                }
            }
        })
    }
}

/// Navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    /// Label
    #[serde(alias = "text")]
    pub label: String,
    /// Target (usually `#anchor`)
    pub href: String,
}

/// Click-to-call phone number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phone {
    /// As shown, e.g. `(11) 99999-9999`
    pub display: String,
    /// As dialled, e.g. `tel:+5511999999999`
    pub link: String,
}

/// `header` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Logo
    pub logo: Logo,
    /// Menu entries
    #[serde(alias = "links")]
    pub navigation: Vec<NavLink>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// `hero` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Headline
    pub title: String,
    /// Supporting copy
    pub description: String,
    /// Main call to action
    pub primary_button: Button,
    /// Optional second call to action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_button: Option<Button>,
    /// Illustration
    pub image: Image,
}

/// `about` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Optional photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Optional call to action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<Button>,
}

/// Icon + text bullet used by `services`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    /// Emoji or short icon label
    pub icon: String,
    /// Service name
    pub text: String,
}

/// `services` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Services offered
    pub items: Vec<ServiceItem>,
    /// Side image
    pub image: Image,
    /// Optional call to action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<Button>,
}

/// Icon + title + description card used by `benefits` and `technology`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    /// Emoji or short icon label
    pub icon: String,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
}

/// `benefits` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenefitsContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Benefit cards
    pub items: Vec<FeatureItem>,
}

/// `technology` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechnologyContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Highlight cards
    pub items: Vec<FeatureItem>,
    /// Side image
    pub image: Image,
    /// Call to action
    pub button: Button,
}

/// One how-it-works step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Step title
    pub title: String,
    /// Step body
    pub description: String,
}

/// `steps` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepsContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Ordered steps
    #[serde(alias = "items")]
    pub steps: Vec<Step>,
    /// Call to action
    pub button: Button,
}

/// Embedded testimonial video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    /// Embed URL (YouTube/Vimeo player URL)
    #[serde(alias = "url", alias = "embed_url")]
    pub embed_url: String,
    /// Accessible title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// `testimonials` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Videos
    pub videos: Vec<Video>,
}

/// Question with its answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    /// Question
    pub question: String,
    /// Answer
    pub answer: String,
}

/// `faq` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Questions
    #[serde(alias = "questions")]
    pub items: Vec<FaqItem>,
}

/// `gallery` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Optional subheading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Images
    pub images: Vec<Image>,
}

/// One pricing card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    /// Plan name
    pub name: String,
    /// Price as displayed, e.g. `R$ 99`
    pub price: String,
    /// Billing period, e.g. `/month`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Short pitch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Included features
    pub features: Vec<String>,
    /// Visually emphasised plan
    pub highlighted: bool,
    /// Call to action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<Button>,
}

/// `pricing` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Optional subheading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Plans, left to right
    pub plans: Vec<PricingPlan>,
}

/// Contact form input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    /// Submitted field name
    pub name: String,
    /// Visible label
    pub label: String,
    /// Input type (`text`, `email`, `tel`, `textarea`)
    #[serde(rename = "type")]
    pub input_type: String,
    /// Whether the browser should require it
    pub required: bool,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            input_type: "text".into(),
            required: false,
            placeholder: None,
        }
    }
}

impl FormField {
    fn new(name: &str, label: &str, input_type: &str, required: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input_type: input_type.into(),
            required,
            placeholder: None,
        }
    }

    /// Fields used when a contact section doesn't list its own.
    pub fn defaults() -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", "text", true),
            FormField::new("email", "Email", "email", true),
            FormField::new("phone", "Phone", "tel", false),
            FormField::new("message", "Message", "textarea", false),
        ]
    }
}

/// Submit button of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitButton {
    /// Label
    pub text: String,
}

/// `contact` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Optional subheading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Form `action` URL
    pub form_action: String,
    /// Inputs; empty means [`FormField::defaults`]
    pub fields: Vec<FormField>,
    /// Submit button
    pub submit_button: SubmitButton,
}

/// `ctaFinal` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaFinalContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Heading
    pub title: String,
    /// Optional subheading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Call to action
    pub button: Button,
}

/// Social profile link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Profile URL
    #[serde(alias = "href")]
    pub url: String,
    /// Label, e.g. `@clinic`
    pub text: String,
}

/// `footer` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    /// Shared frame
    #[serde(flatten)]
    pub frame: SectionFrame,
    /// Instagram profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<SocialLink>,
    /// Copyright line
    pub copyright: String,
    /// Privacy/terms link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_link: Option<Link>,
}

/// Render-ready payload of one section, one variant per [`SectionKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum SectionContent {
    /// `header`
    Header(HeaderContent),
    /// `hero`
    Hero(HeroContent),
    /// `about`
    About(AboutContent),
    /// `services`
    Services(ServicesContent),
    /// `benefits`
    Benefits(BenefitsContent),
    /// `technology`
    Technology(TechnologyContent),
    /// `steps`
    Steps(StepsContent),
    /// `testimonials`
    Testimonials(TestimonialsContent),
    /// `faq`
    Faq(FaqContent),
    /// `gallery`
    Gallery(GalleryContent),
    /// `pricing`
    Pricing(PricingContent),
    /// `contact`
    Contact(ContactContent),
    /// `ctaFinal`
    CtaFinal(CtaFinalContent),
    /// `footer`
    Footer(FooterContent),
}

impl SectionContent {
    /// Decode a JSON object into the payload type of `kind`.
    pub fn decode(kind: SectionKind, value: Value) -> Result<Self, serde_json::Error> {
        use serde_json::from_value;

        Ok(match kind {
            SectionKind::Header => SectionContent::Header(from_value(value)?),
            SectionKind::Hero => SectionContent::Hero(from_value(value)?),
            SectionKind::About => SectionContent::About(from_value(value)?),
            SectionKind::Services => SectionContent::Services(from_value(value)?),
            SectionKind::Benefits => SectionContent::Benefits(from_value(value)?),
            SectionKind::Technology => SectionContent::Technology(from_value(value)?),
            SectionKind::Steps => SectionContent::Steps(from_value(value)?),
            SectionKind::Testimonials => SectionContent::Testimonials(from_value(value)?),
            SectionKind::Faq => SectionContent::Faq(from_value(value)?),
            SectionKind::Gallery => SectionContent::Gallery(from_value(value)?),
            SectionKind::Pricing => SectionContent::Pricing(from_value(value)?),
            SectionKind::Contact => SectionContent::Contact(from_value(value)?),
            SectionKind::CtaFinal => SectionContent::CtaFinal(from_value(value)?),
            SectionKind::Footer => SectionContent::Footer(from_value(value)?),
        })
    }

    /// The kind this payload belongs to.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Header(_) => SectionKind::Header,
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::About(_) => SectionKind::About,
            SectionContent::Services(_) => SectionKind::Services,
            SectionContent::Benefits(_) => SectionKind::Benefits,
            SectionContent::Technology(_) => SectionKind::Technology,
            SectionContent::Steps(_) => SectionKind::Steps,
            SectionContent::Testimonials(_) => SectionKind::Testimonials,
            SectionContent::Faq(_) => SectionKind::Faq,
            SectionContent::Gallery(_) => SectionKind::Gallery,
            SectionContent::Pricing(_) => SectionKind::Pricing,
            SectionContent::Contact(_) => SectionKind::Contact,
            SectionContent::CtaFinal(_) => SectionKind::CtaFinal,
            SectionContent::Footer(_) => SectionKind::Footer,
        }
    }

    /// Shared id/colour fields.
    pub fn frame(&self) -> &SectionFrame {
        match self {
            SectionContent::Header(c) => &c.frame,
            SectionContent::Hero(c) => &c.frame,
            SectionContent::About(c) => &c.frame,
            SectionContent::Services(c) => &c.frame,
            SectionContent::Benefits(c) => &c.frame,
            SectionContent::Technology(c) => &c.frame,
            SectionContent::Steps(c) => &c.frame,
            SectionContent::Testimonials(c) => &c.frame,
            SectionContent::Faq(c) => &c.frame,
            SectionContent::Gallery(c) => &c.frame,
            SectionContent::Pricing(c) => &c.frame,
            SectionContent::Contact(c) => &c.frame,
            SectionContent::CtaFinal(c) => &c.frame,
            SectionContent::Footer(c) => &c.frame,
        }
    }
}
