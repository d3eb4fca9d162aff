//! Dispatch from a resolved section to its component.

use leptos::prelude::*;

use super::{
    AboutSection, BenefitsSection, ContactSection, CtaFinalSection, FaqSection, FooterSection,
    GallerySection, HeaderSection, HeroSection, PricingSection, ServicesSection, StepsSection,
    TechnologySection, TestimonialsSection, frame_style,
};
use crate::content::SectionContent;
use crate::resolve::ResolvedSection;

/// One `<section>` of the page, wrapping the component for its kind.
///
/// The wrapper carries the anchor id, the `lp-<kind>` class and the resolved
/// colours as an inline style.
#[component]
pub fn SectionView(section: ResolvedSection) -> impl IntoView {
    let anchor = section.anchor();
    let kind = section.kind;
    let class = format!("lp-section lp-{}", kind.anchor());
    let style = frame_style(section.content.frame());

    let body = match section.content {
        SectionContent::Header(content) => view! { <HeaderSection content=content /> }.into_any(),
        SectionContent::Hero(content) => view! { <HeroSection content=content /> }.into_any(),
        SectionContent::About(content) => view! { <AboutSection content=content /> }.into_any(),
        SectionContent::Services(content) => view! { <ServicesSection content=content /> }.into_any(),
        SectionContent::Benefits(content) => view! { <BenefitsSection content=content /> }.into_any(),
        SectionContent::Technology(content) => {
            view! { <TechnologySection content=content /> }.into_any()
        }
        SectionContent::Steps(content) => view! { <StepsSection content=content /> }.into_any(),
        SectionContent::Testimonials(content) => {
            view! { <TestimonialsSection content=content /> }.into_any()
        }
        SectionContent::Faq(content) => view! { <FaqSection content=content /> }.into_any(),
        SectionContent::Gallery(content) => view! { <GallerySection content=content /> }.into_any(),
        SectionContent::Pricing(content) => view! { <PricingSection content=content /> }.into_any(),
        SectionContent::Contact(content) => view! { <ContactSection content=content /> }.into_any(),
        SectionContent::CtaFinal(content) => view! { <CtaFinalSection content=content /> }.into_any(),
        SectionContent::Footer(content) => view! { <FooterSection content=content /> }.into_any(),
    };

    view! {
        <section id=anchor class=class data-section-type=kind.as_str() style=style>
            {body}
        </section>
    }
}
