//! Hero banner: navigation, animated heading block and the two calls to action.

use leptos::prelude::*;

use crate::entrance::EntranceState;
use crate::types::{HeroContent, SectionKind};

/// The page header with background image, nav bar and intro block.
#[component]
pub fn HeroSection(content: HeroContent) -> impl IntoView {
    let HeroContent {
        background,
        brand_mark,
        brand_name,
        nav,
        heading,
        tagline,
        primary_cta,
        secondary_cta,
    } = content;

    view! {
        <header
            class="hero"
            data-section={SectionKind::Hero.slug()}
            style=format!("background-image: url('{}')", background)
        >
            <div class="hero-overlay"></div>
            <div class="hero-inner container">
                <nav class="hero-nav">
                    <div class="brand">
                        <div class="brand-mark">{brand_mark}</div>
                        <span class="sr-only">{brand_name}</span>
                    </div>
                    <div class="nav-links">
                        {nav.into_iter().map(|link| view! {
                            <a href=link.href>{link.label}</a>
                        }).collect::<Vec<_>>()}
                    </div>
                </nav>

                <div class="hero-intro" data-entrance={EntranceState::default().as_str()}>
                    <h1 class="hero-title">{heading}</h1>
                    <p class="hero-tagline">{tagline}</p>
                    <div class="hero-actions">
                        <a href=primary_cta.href class="btn btn-solid" data-cta="primary">
                            {primary_cta.label}
                        </a>
                        <a href=secondary_cta.href class="btn btn-text" data-cta="secondary">
                            {secondary_cta.label}
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
