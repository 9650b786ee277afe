//! Inline SVG icons.
//!
//! Outline icons on a 24×24 grid, stroked with `currentColor` so they pick up
//! the surrounding text colour.

use leptos::prelude::*;

/// Renders an outline SVG icon from one or more path data strings.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_SPARK class="service-glyph" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute of each `<path>`)
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            class=class
        >
            {paths.iter().copied().map(|d| view! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d></path>
            }).collect::<Vec<_>>()}
        </svg>
    }
}

/// Service card glyph: a drop with a spark above it.
pub const ICON_SPARK: &[&str] = &[
    "M12 8c-1.657 0-3 1.567-3 3.5S10.343 15 12 15s3-1.567 3-3.5S13.657 8 12 8z",
    "M12 2v2",
];
