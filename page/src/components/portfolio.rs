//! Portfolio grid.

use leptos::prelude::*;

use crate::types::{PortfolioContent, PortfolioItem, SectionKind};

/// Figures in declaration order, followed by the gallery link.
#[component]
pub fn PortfolioGrid(content: PortfolioContent) -> impl IntoView {
    let PortfolioContent {
        heading,
        items,
        gallery_link,
    } = content;

    view! {
        <section id="portfolio" class="section" data-section={SectionKind::Portfolio.slug()}>
            <h3 class="section-title">{heading}</h3>
            <div class="portfolio-grid">
                {items.into_iter().enumerate().map(|(position, item)| view! {
                    <PortfolioFigure position=position item=item />
                }).collect::<Vec<_>>()}
            </div>
            <div class="portfolio-more">
                <a href=gallery_link.href class="btn btn-outline">{gallery_link.label}</a>
            </div>
        </section>
    }
}

#[component]
fn PortfolioFigure(position: usize, item: PortfolioItem) -> impl IntoView {
    let src = item.image_path();
    let alt = item.alt_text();

    view! {
        <figure class="portfolio-figure" data-key={position.to_string()}>
            <img src=src alt=alt loading="lazy" />
            <figcaption class="portfolio-caption">
                <div class="portfolio-title">{item.caption}</div>
                <div class="portfolio-meta">{item.meta}</div>
            </figcaption>
        </figure>
    }
}
