//! Page footer.

use leptos::prelude::*;

use crate::types::{FooterContent, SectionKind};

/// Brand, quick links, contact details and the copyright line for `year`.
#[component]
pub fn PageFooter(content: FooterContent, year: i32) -> impl IntoView {
    let FooterContent {
        brand,
        tagline,
        quick_links,
        email,
        phone,
        copyright_holder,
    } = content;
    let copyright = format!("© {} {}", year, copyright_holder);

    view! {
        <footer class="footer" data-section={SectionKind::Footer.slug()}>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{brand}</div>
                    <div class="footer-muted">{tagline}</div>
                </div>
                <div>
                    <div class="footer-heading">"Quick Links"</div>
                    <ul class="footer-links">
                        {quick_links.into_iter().map(|link| view! {
                            <li><a href=link.href>{link.label}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <div class="footer-heading">"Contact"</div>
                    <div class="footer-muted">
                        <div>{format!("Email: {}", email)}</div>
                        <div>{format!("Phone: {}", phone)}</div>
                    </div>
                </div>
            </div>
            <div class="footer-copyright">{copyright}</div>
        </footer>
    }
}
