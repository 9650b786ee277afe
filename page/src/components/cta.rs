//! Call-to-action banner.

use leptos::prelude::*;

use crate::types::{CtaContent, SectionKind};

/// Full-width banner pointing back at the contact form.
#[component]
pub fn CallToAction(content: CtaContent) -> impl IntoView {
    view! {
        <section class="section cta" data-section={SectionKind::CallToAction.slug()}>
            <div
                class="cta-backdrop"
                style=format!("background-image: url('{}')", content.background)
            ></div>
            <div class="cta-inner">
                <h3 class="cta-title">{content.heading}</h3>
                <p class="cta-body">{content.body}</p>
                <a href=content.link.href class="btn btn-solid">{content.link.label}</a>
            </div>
        </section>
    }
}
