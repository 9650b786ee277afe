//! # tiffany-page
//!
//! Leptos SSR renderer for the A Tiffany Affair and Design homepage.
//!
//! The page is one static document: hero banner, about teaser, services grid,
//! portfolio gallery, testimonials, call-to-action, contact form and footer.
//! Every section is a pure function of its content record, and the repeated
//! blocks (services, portfolio items, testimonials) are driven by ordered
//! lists in [`types::PageContent`].
//!
//! ## Quick Start
//!
//! ```rust
//! use tiffany_page::{render_page_for_year, types::PageContent};
//!
//! let html = render_page_for_year(&PageContent::default(), 2025);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2025 A Tiffany Affair and Design"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content records and the fixed section order
//! - [`content`] - loading and validating content JSON
//! - [`components`] - Leptos section components
//! - [`entrance`] - one-shot entrance transition of the hero heading block
//! - [`styles`] - colour tokens and page CSS
//!
//! Rendering uses Leptos 0.8's `RenderHtml::to_html()`; no reactive runtime or
//! hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod entrance;
pub mod styles;
pub mod types;

use chrono::Datelike;
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;
use types::PageContent;

pub use content::ContentError;

/// Render the complete page, stamping the footer with the current year.
///
/// The year is read from the system clock on every call, so a render after a
/// year boundary picks up the new year.
pub fn render_page(content: &PageContent) -> String {
    render_page_for_year(content, current_year())
}

/// Render the complete page with an explicit footer year.
///
/// Output is a full HTML document, including `<!DOCTYPE html>`. Rendering the
/// same content and year twice yields identical output.
pub fn render_page_for_year(content: &PageContent, year: i32) -> String {
    debug!(
        services = content.services.items.len(),
        portfolio = content.portfolio.items.len(),
        testimonials = content.testimonials.items.len(),
        year,
        "rendering page"
    );

    let doc = view! {
        <PageDocument content=content.clone() year=year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the built-in homepage copy with the current year.
pub fn render_default_page() -> String {
    render_page(&PageContent::default())
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
