//! Contact form placeholder.
//!
//! Presentational only: labeled fields and a submit button. Where the form
//! posts to is up to the hosting site; without an `action` the form has none.

use leptos::prelude::*;

use crate::types::{ContactContent, FormField, SectionKind};

/// Inquiry form in a two-column grid.
#[component]
pub fn ContactForm(content: ContactContent) -> impl IntoView {
    let ContactContent {
        heading,
        fields,
        submit_label,
        reply_note,
        action,
    } = content;
    let method = action.as_ref().map(|_| "post");

    view! {
        <section id="contact" class="section contact" data-section={SectionKind::Contact.slug()}>
            <h3 class="section-title">{heading}</h3>
            <form class="contact-form" action=action method=method>
                {fields.into_iter().map(|field| view! { <InquiryField field=field /> }).collect::<Vec<_>>()}
                <div class="form-actions">
                    <button type="submit" class="btn btn-solid">{submit_label}</button>
                    <span class="form-note">{reply_note}</span>
                </div>
            </form>
        </section>
    }
}

#[component]
fn InquiryField(field: FormField) -> impl IntoView {
    let id = field.control_id();
    let class = if field.wide { "form-field form-field--wide" } else { "form-field" };

    let control = match field.kind.input_type() {
        Some(input_type) => view! {
            <input
                id=id.clone()
                name=field.name.clone()
                type=input_type
                placeholder=field.placeholder.clone()
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=id.clone()
                name=field.name.clone()
                rows="4"
                placeholder=field.placeholder.clone()
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class=class>
            <label for=id>{field.label}</label>
            {control}
        </div>
    }
}
