//! Client testimonials.

use leptos::prelude::*;

use crate::types::{SectionKind, Testimonial, TestimonialsContent};

/// Quote blocks in declaration order.
#[component]
pub fn TestimonialsStrip(content: TestimonialsContent) -> impl IntoView {
    view! {
        <section class="section testimonials" data-section={SectionKind::Testimonials.slug()}>
            <h3 class="section-title">{content.heading}</h3>
            <div class="testimonial-list">
                {content.items.into_iter().enumerate().map(|(position, testimonial)| view! {
                    <TestimonialCard position=position testimonial=testimonial />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(position: usize, testimonial: Testimonial) -> impl IntoView {
    // single text node, so curly quotes stay attached to the quote
    let quote = format!("“{}”", testimonial.quote);

    view! {
        <blockquote class="testimonial-card" data-key={position.to_string()}>
            <p class="testimonial-quote">{quote}</p>
            <div class="testimonial-attribution">{testimonial.attribution}</div>
        </blockquote>
    }
}
