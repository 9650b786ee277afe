//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::{
    AboutTeaser, CallToAction, ContactForm, HeroSection, PageFooter, PortfolioGrid, ServicesGrid,
    TestimonialsStrip,
};
use crate::entrance::{EntranceTiming, ENTRANCE_SCRIPT, NOSCRIPT_CSS};
use crate::styles::{token_css, PAGE_CSS};
use crate::types::PageContent;

/// The complete HTML document for the homepage.
///
/// Sections are laid out in the fixed order of [`crate::types::SectionKind::ORDER`]:
/// the hero is the page header, everything else sits in the main column.
#[component]
pub fn PageDocument(
    content: PageContent,
    /// Year printed in the footer copyright line
    year: i32,
) -> impl IntoView {
    let css = format!("{}{}{}", token_css(), PAGE_CSS, EntranceTiming::default().css());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{content.title}</title>
                <style>{css}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <HeroSection content=content.hero />
                <main class="page-main">
                    <AboutTeaser content=content.about />
                    <ServicesGrid content=content.services />
                    <PortfolioGrid content=content.portfolio />
                    <TestimonialsStrip content=content.testimonials />
                    <CallToAction content=content.cta />
                    <ContactForm content=content.contact />
                    <PageFooter content=content.footer year=year />
                </main>
                <script>{ENTRANCE_SCRIPT}</script>
            </body>
        </html>
    }
}
