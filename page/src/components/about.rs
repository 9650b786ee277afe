//! About teaser card.

use leptos::prelude::*;

use crate::types::{AboutContent, SectionKind};

/// Portrait plus a short introduction and a link to the about page.
#[component]
pub fn AboutTeaser(content: AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="about-card" data-section={SectionKind::About.slug()}>
            <div
                class="about-portrait"
                style=format!("background-image: url('{}')", content.image)
            ></div>
            <div>
                <h2 class="about-title">{content.heading}</h2>
                <p class="about-body">{content.body}</p>
                <a href=content.link.href class="about-link">{content.link.label}</a>
            </div>
        </section>
    }
}
