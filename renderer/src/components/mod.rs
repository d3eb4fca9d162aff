//! Leptos components for landing page sections.
//!
//! Every section kind has one `#[component]` that takes its typed payload.
//! [`SectionView`] picks the right one and wraps it in a styled `<section>`,
//! and [`PageDocument`] assembles the full page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── SectionView (per active section, in order)
//!     ├── HeaderSection        ├── TestimonialsSection
//!     ├── HeroSection          ├── FaqSection
//!     ├── AboutSection         ├── GallerySection
//!     ├── ServicesSection      ├── PricingSection
//!     ├── BenefitsSection      ├── ContactSection
//!     ├── TechnologySection    ├── CtaFinalSection
//!     └── StepsSection         └── FooterSection
//! ```
//!
//! Components can also be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use lp_renderer::components::FaqSection;
//!
//! view! { <FaqSection content=faq /> }
//! ```

mod about;
mod benefits;
mod contact;
mod cta_final;
mod document;
mod faq;
mod footer;
mod gallery;
mod header;
mod hero;
mod icons;
mod pricing;
mod section;
mod services;
mod shared;
mod steps;
mod technology;
mod testimonials;

pub use about::AboutSection;
pub use benefits::BenefitsSection;
pub use contact::ContactSection;
pub use cta_final::CtaFinalSection;
pub use document::PageDocument;
pub use faq::FaqSection;
pub use footer::FooterSection;
pub use gallery::GallerySection;
pub use header::HeaderSection;
pub use hero::HeroSection;
pub use icons::*;
pub use pricing::PricingSection;
pub use section::SectionView;
pub use services::ServicesSection;
pub use shared::{ButtonLink, SectionImage, SectionTitle, SmartLink, frame_style};
pub use steps::StepsSection;
pub use technology::{FeatureCard, TechnologySection};
pub use testimonials::TestimonialsSection;
