//! Inline SVG icons (Phosphor, regular weight).

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CHECK size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Check mark, used for service and plan feature bullets
pub const ICON_CHECK: &str = "M229.66,77.66l-128,128a8,8,0,0,1-11.32,0l-56-56a8,8,0,0,1,11.32-11.32L96,188.69,218.34,66.34a8,8,0,0,1,11.32,11.32Z";

/// Caret pointing down, for FAQ disclosure rows
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

/// Handset, next to the header phone number
pub const ICON_PHONE: &str = "M222,158.4l-46.9-21a16,16,0,0,0-15.2,1.4l-24.6,16.4a74.5,74.5,0,0,1-34.5-34.3l16.2-24.9a16,16,0,0,0,1.3-15.2L97.6,34a16,16,0,0,0-16.7-9.5A56.2,56.2,0,0,0,32,80c0,79.4,64.6,144,144,144a56.2,56.2,0,0,0,55.5-48.9A16,16,0,0,0,222,158.4ZM176,208A128.1,128.1,0,0,1,48,80,40.2,40.2,0,0,1,82.9,40.3l21,46.9L87.6,112a16,16,0,0,0-1.1,15.6,90.7,90.7,0,0,0,41.9,41.8,16,16,0,0,0,15.7-1.2l24.5-16.3,46.9,21A40.2,40.2,0,0,1,176,208Z";
