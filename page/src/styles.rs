//! CSS for the homepage.
//!
//! Colour tokens come from [`COLOR_TOKENS`] and are exposed as CSS custom
//! properties by [`token_css`]; everything else lives in [`PAGE_CSS`].
//!
//! # Customization
//!
//! ```rust
//! use tiffany_page::styles::PAGE_CSS;
//!
//! let my_css = ".service-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Named colours the hosting style system must supply, with their hex values.
pub const COLOR_TOKENS: [(&str, &str); 3] = [
    ("ivory-50", "#FBF8F5"),
    ("ivory-100", "#F6F2EE"),
    ("gold-600", "#B98B4A"),
];

/// `:root` block declaring every colour token as `--<name>`.
pub fn token_css() -> String {
    let vars: String = COLOR_TOKENS
        .iter()
        .map(|(name, hex)| format!("    --{}: {};\n", name, hex))
        .collect();
    format!(":root {{\n{}}}\n", vars)
}

/// Layout and typography for all sections.
///
/// Grids collapse to one column on small screens:
/// - services: 1 → 3 columns at 768px
/// - portfolio: 1 → 2 columns at 640px → 3 columns at 1024px
/// - contact form and about card: 1 → 2 columns at 768px
/// - footer: 1 → 3 columns at 768px
pub const PAGE_CSS: &str = r#"
:root {
    --text-main: #111827;
    --text-body: #4b5563;
    --text-soft: #6b7280;
    --surface: #ffffff;
    --border-soft: #e5e7eb;
    --font-serif: 'Playfair Display', Georgia, 'Times New Roman', serif;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 72rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    color: var(--text-main);
    background: var(--ivory-50);
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    max-width: 100%;
}

h1, h2, h3, .serif {
    font-family: var(--font-serif);
    font-weight: 400;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

.accent {
    color: var(--gold-600);
}

/* Buttons */
.btn {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 0.375rem;
    font-weight: 500;
    border: 1px solid transparent;
}

.btn-solid {
    padding: 0.75rem 2rem;
    background: var(--gold-600);
    border-color: var(--gold-600);
    color: #fff;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.btn-solid:hover {
    filter: brightness(0.95);
}

.btn-text {
    color: var(--gold-600);
}

.btn-text:hover {
    text-decoration: underline;
}

.btn-outline {
    border-color: var(--gold-600);
    color: var(--gold-600);
}

/* Hero */
.hero {
    position: relative;
    background-position: center;
    background-size: cover;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(251, 248, 245, 0.6), rgba(255, 255, 255, 0.7));
}

.hero-inner {
    position: relative;
    z-index: 10;
    padding-top: 5rem;
    padding-bottom: 6rem;
}

.hero-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand-mark {
    width: 3rem;
    height: 3rem;
    border-radius: 0.375rem;
    background: rgba(255, 255, 255, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    font-family: var(--font-serif);
    font-size: 1.25rem;
    color: var(--gold-600);
}

.nav-links {
    display: none;
    gap: 2rem;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.nav-links a:hover {
    color: var(--gold-600);
}

.hero-intro {
    margin: 4rem auto 0;
    max-width: 48rem;
    text-align: center;
}

.hero-title {
    font-size: 2.25rem;
    line-height: 1.25;
    margin: 0;
}

.hero-tagline {
    margin-top: 1rem;
    font-size: 1.125rem;
    color: var(--text-body);
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    justify-content: center;
    gap: 1rem;
}

/* Main column */
.page-main {
    max-width: var(--container-max);
    margin: -4rem auto 0;
    padding: 0 1.5rem;
}

.section {
    margin-top: 3rem;
}

.section-title {
    font-size: 1.5rem;
    margin: 0 0 1.5rem;
}

/* About */
.about-card {
    position: relative;
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    align-items: center;
    padding: 2rem;
    background: var(--surface);
    border-radius: 1rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.about-portrait {
    aspect-ratio: 4 / 3;
    background-position: center;
    background-size: cover;
    border-radius: 0.75rem;
    overflow: hidden;
}

.about-title {
    font-size: 1.875rem;
    margin: 0;
}

.about-body {
    margin-top: 1rem;
    color: var(--text-body);
}

.about-link {
    display: inline-block;
    margin-top: 1.5rem;
    color: var(--gold-600);
    font-weight: 500;
}

/* Services */
.services-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.service-card {
    padding: 1.5rem;
    background: var(--surface);
    border: 1px solid var(--border-soft);
    border-radius: 0.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.service-icon {
    width: 3rem;
    height: 3rem;
    margin-bottom: 1rem;
    border-radius: 0.375rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--ivory-100);
}

.service-title {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0;
}

.service-description {
    margin-top: 0.5rem;
    color: var(--text-body);
}

.service-link {
    display: inline-block;
    margin-top: 1rem;
    color: var(--gold-600);
}

/* Portfolio */
.portfolio-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

.portfolio-figure {
    margin: 0;
    border-radius: 0.5rem;
    overflow: hidden;
    background: #f3f4f6;
}

.portfolio-figure img {
    width: 100%;
    height: 16rem;
    object-fit: cover;
}

.portfolio-caption {
    padding: 1rem;
    background: var(--surface);
}

.portfolio-title {
    font-size: 0.875rem;
    font-weight: 600;
}

.portfolio-meta {
    margin-top: 0.25rem;
    font-size: 0.75rem;
    color: var(--text-soft);
}

.portfolio-more {
    margin-top: 1.5rem;
    text-align: center;
}

/* Testimonials */
.testimonials {
    padding: 2rem;
    background: var(--ivory-50);
    border-radius: 1rem;
}

.testimonial-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.testimonial-card {
    flex: 1;
    margin: 0;
    padding: 1.5rem;
    background: var(--surface);
    border: 1px solid var(--border-soft);
    border-radius: 0.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.testimonial-quote {
    margin: 0;
    font-style: italic;
    color: #374151;
}

.testimonial-attribution {
    margin-top: 1rem;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--text-body);
}

/* Call to action */
.cta {
    position: relative;
    border-radius: 1rem;
    overflow: hidden;
}

.cta-backdrop {
    position: absolute;
    inset: 0;
    background-position: center;
    background-size: cover;
    opacity: 0.3;
}

.cta-inner {
    position: relative;
    z-index: 10;
    padding: 2rem;
    text-align: center;
    background: linear-gradient(to right, rgba(255, 255, 255, 0.8), rgba(251, 248, 245, 0.8));
}

.cta-title {
    font-size: 1.875rem;
    margin: 0;
}

.cta-body {
    margin-top: 1rem;
    color: var(--text-body);
}

.cta-inner .btn {
    margin-top: 1.5rem;
}

/* Contact */
.contact {
    padding: 2rem;
    background: var(--surface);
    border-radius: 1rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.contact-form {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

.form-field {
    display: flex;
    flex-direction: column;
    gap: 0.375rem;
    font-size: 0.875rem;
    color: var(--text-body);
}

.form-field input,
.form-field textarea {
    padding: 0.75rem;
    border: 1px solid var(--border-soft);
    border-radius: 0.375rem;
    font: inherit;
    color: var(--text-main);
}

.form-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.form-note {
    font-size: 0.875rem;
    color: var(--text-body);
}

/* Footer */
.footer {
    margin-top: 3rem;
    padding: 3rem 0;
    font-size: 0.875rem;
    color: #374151;
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    align-items: start;
}

.footer-brand {
    font-family: var(--font-serif);
    font-size: 1.25rem;
}

.footer-heading {
    font-weight: 600;
}

.footer-links {
    list-style: none;
    margin: 0.75rem 0 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    color: var(--text-body);
}

.footer-muted {
    margin-top: 0.5rem;
    color: var(--text-body);
}

.footer-copyright {
    margin-top: 2.5rem;
    text-align: center;
    color: var(--text-soft);
}

@media (min-width: 640px) {
    .portfolio-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
        align-items: center;
    }
    .hero-title {
        font-size: 3.75rem;
    }
    .hero-tagline {
        font-size: 1.25rem;
    }
    .about-card {
        grid-template-columns: repeat(2, 1fr);
        padding: 3rem;
    }
    .services-grid {
        grid-template-columns: repeat(3, 1fr);
    }
    .testimonial-list {
        flex-direction: row;
    }
    .cta-inner {
        padding: 5rem;
    }
    .contact-form {
        grid-template-columns: repeat(2, 1fr);
    }
    .form-field--wide,
    .form-actions {
        grid-column: span 2;
    }
    .footer-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

@media (min-width: 1024px) {
    .portfolio-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_css_declares_every_token() {
        let css = token_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--ivory-50: #FBF8F5;"));
        assert!(css.contains("--ivory-100: #F6F2EE;"));
        assert!(css.contains("--gold-600: #B98B4A;"));
    }

    #[test]
    fn page_css_uses_every_token() {
        for (name, _) in COLOR_TOKENS {
            assert!(PAGE_CSS.contains(&format!("var(--{})", name)), "{name} unused");
        }
    }
}
