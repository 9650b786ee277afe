//! Services grid.

use leptos::prelude::*;

use super::{Icon, ICON_SPARK};
use crate::types::{Link, SectionKind, Service, ServicesContent};

/// One card per service, in declaration order.
#[component]
pub fn ServicesGrid(content: ServicesContent) -> impl IntoView {
    let ServicesContent {
        heading,
        items,
        card_link,
    } = content;

    view! {
        <section id="services" class="section" data-section={SectionKind::Services.slug()}>
            <h3 class="section-title">{heading}</h3>
            <div class="services-grid">
                {items.into_iter().enumerate().map(|(position, service)| view! {
                    <ServiceCard position=position service=service link=card_link.clone() />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Icon, title, description and explore link.
#[component]
fn ServiceCard(position: usize, service: Service, link: Link) -> impl IntoView {
    view! {
        <article class="service-card" data-key={position.to_string()}>
            <div class="service-icon">
                <Icon paths=ICON_SPARK />
            </div>
            <h4 class="service-title">{service.title}</h4>
            <p class="service-description">{service.description}</p>
            <a href=link.href class="service-link">{link.label}</a>
        </article>
    }
}
