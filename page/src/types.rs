//! Page content types.
//!
//! Every section of the homepage is driven by one of these records. They're
//! designed to be:
//!
//! - **Serializable** - the whole page can be loaded from a JSON file via serde
//! - **Clone-friendly** - components take owned data without borrowing issues
//! - **Default-able** - `PageContent::default()` is the published homepage copy,
//!   and partial JSON files fall back to it field by field
//!
//! # Example
//!
//! ```rust
//! use tiffany_page::types::{PageContent, Service};
//!
//! let mut content = PageContent::default();
//! content.services.items.push(Service {
//!     title: "Floral Design".into(),
//!     description: "Seasonal arrangements and installations.".into(),
//! });
//! assert_eq!(content.services.items.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// The top-level regions of the page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Hero banner with navigation and the animated heading block
    Hero,
    /// About teaser
    About,
    /// Services grid
    Services,
    /// Portfolio grid
    Portfolio,
    /// Client testimonials
    Testimonials,
    /// Call-to-action banner
    CallToAction,
    /// Contact form placeholder
    Contact,
    /// Footer
    Footer,
}

impl SectionKind {
    /// Fixed render order of the page.
    pub const ORDER: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Portfolio,
        SectionKind::Testimonials,
        SectionKind::CallToAction,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    /// Value of the `data-section` attribute on the section root.
    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Portfolio => "portfolio",
            SectionKind::Testimonials => "testimonials",
            SectionKind::CallToAction => "cta",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }
}

/// A link target emitted for the routing layer (anchor or page-relative).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible link text
    pub label: String,
    /// `#anchor` or `/path`
    pub href: String,
}

impl Link {
    /// Build a link from anything string-like.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// One offering in the services grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Card heading
    pub title: String,
    /// One-line summary under the heading
    pub description: String,
}

/// One figure in the portfolio grid.
///
/// The image path and alt text are derived from the 1-based `index`; caption
/// and meta line are per-item copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// 1-based position used for the image file name
    pub index: u32,
    /// Figure caption (event name)
    pub caption: String,
    /// Secondary line, e.g. "Wedding • 150 guests"
    pub meta: String,
}

impl PortfolioItem {
    /// Placeholder item used by the default content.
    pub fn placeholder(index: u32) -> Self {
        Self {
            index,
            caption: "Elegant Coastal Wedding".into(),
            meta: "Wedding • 150 guests".into(),
        }
    }

    /// Asset path for this item's image.
    pub fn image_path(&self) -> String {
        format!("/images/portfolio-{}.jpg", self.index)
    }

    /// Alt text for this item's image.
    pub fn alt_text(&self) -> String {
        format!("Portfolio {}", self.index)
    }
}

/// A client quote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quote text, without surrounding quotation marks
    pub quote: String,
    /// Who said it, e.g. "— L. S."
    pub attribution: String,
}

/// Input control used for a contact form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text
    #[default]
    Text,
    /// Email address
    Email,
    /// Phone number
    Tel,
    /// Calendar date
    Date,
    /// Multi-line free text
    TextArea,
}

impl FieldKind {
    /// `type` attribute for `<input>`; `None` for a `<textarea>`.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::Date => Some("date"),
            FieldKind::TextArea => None,
        }
    }
}

/// A labeled field of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Form field name as the backend would receive it
    pub name: String,
    /// Visible label
    pub label: String,
    /// Placeholder hint
    #[serde(default)]
    pub placeholder: String,
    /// Control type
    #[serde(default)]
    pub kind: FieldKind,
    /// Spans both columns of the form grid
    #[serde(default)]
    pub wide: bool,
}

impl FormField {
    fn new(name: &str, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
            kind,
            wide: kind == FieldKind::TextArea,
        }
    }

    /// DOM id of the control, referenced by the label.
    pub fn control_id(&self) -> String {
        format!("inquiry-{}", self.name)
    }
}

/// Hero banner: navigation, heading, tagline and two calls to action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Background image path
    pub background: String,
    /// Letter shown in the brand mark
    pub brand_mark: String,
    /// Screen-reader name next to the brand mark
    pub brand_name: String,
    /// In-page navigation links
    pub nav: Vec<Link>,
    /// The page `<h1>`
    pub heading: String,
    /// Line under the heading
    pub tagline: String,
    /// Filled button
    pub primary_cta: Link,
    /// Text button
    pub secondary_cta: Link,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            background: "/images/hero.jpg".into(),
            brand_mark: "A".into(),
            brand_name: "A Tiffany Affair and Design".into(),
            nav: vec![
                Link::new("Services", "#services"),
                Link::new("Portfolio", "#portfolio"),
                Link::new("About", "#about"),
                Link::new("Contact", "#contact"),
            ],
            heading: "Luxury Event Planning & Décor Services".into(),
            tagline: "Crafting unforgettable experiences with timeless design.".into(),
            primary_cta: Link::new("Start Planning", "#contact"),
            secondary_cta: Link::new("View Portfolio", "#portfolio"),
        }
    }
}

/// About teaser card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Portrait image path
    pub image: String,
    /// Section heading
    pub heading: String,
    /// Body copy
    pub body: String,
    /// Link to the full about page
    pub link: Link,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            image: "/images/about-portrait.jpg".into(),
            heading: "Meet Tiffany".into(),
            body: "I blend editorial sensibility with meticulous planning to create events \
                   that feel curated, vibrant, and utterly personal. From intimate gatherings \
                   to grand celebrations, every detail matters."
                .into(),
            link: Link::new("Learn more →", "/about"),
        }
    }
}

/// Services grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    /// Section heading
    pub heading: String,
    /// One card per service, in display order
    pub items: Vec<Service>,
    /// Link repeated on every card
    pub card_link: Link,
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            heading: "Services".into(),
            items: vec![
                Service {
                    title: "Event Planning".into(),
                    description: "Full-service planning from concept to day-of management."
                        .into(),
                },
                Service {
                    title: "Design & Styling".into(),
                    description: "Bespoke design direction, rentals, and installation.".into(),
                },
                Service {
                    title: "Décor Rentals".into(),
                    description: "Curated rentals for tablescapes, lounges, and more.".into(),
                },
            ],
            card_link: Link::new("Explore →", "/services"),
        }
    }
}

/// Portfolio grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    /// Section heading
    pub heading: String,
    /// One figure per item, in display order
    pub items: Vec<PortfolioItem>,
    /// Button under the grid
    pub gallery_link: Link,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            heading: "Featured Work".into(),
            items: (1..=6).map(PortfolioItem::placeholder).collect(),
            gallery_link: Link::new("View Full Gallery", "/gallery"),
        }
    }
}

/// Testimonials strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    /// Section heading
    pub heading: String,
    /// One quote block per testimonial, in display order
    pub items: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            heading: "What clients say".into(),
            items: vec![
                Testimonial {
                    quote: "Tiffany made our day effortless and stunning beyond imagination."
                        .into(),
                    attribution: "— K. & J.".into(),
                },
                Testimonial {
                    quote: "The design felt personal and elevated. Guests were blown away.".into(),
                    attribution: "— L. S.".into(),
                },
            ],
        }
    }
}

/// Call-to-action banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaContent {
    /// Background image path
    pub background: String,
    /// Banner heading
    pub heading: String,
    /// Body copy
    pub body: String,
    /// Button
    pub link: Link,
}

impl Default for CtaContent {
    fn default() -> Self {
        Self {
            background: "/images/cta.jpg".into(),
            heading: "Your Dream Event, Perfectly Designed.".into(),
            body: "Connect with our team to start planning an experience your guests will \
                   never forget."
                .into(),
            link: Link::new("Let’s Get Started", "#contact"),
        }
    }
}

/// Contact form placeholder. Submission is handled elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    /// Section heading
    pub heading: String,
    /// Form fields, in display order
    pub fields: Vec<FormField>,
    /// Submit button text
    pub submit_label: String,
    /// Note next to the submit button
    pub reply_note: String,
    /// Backend endpoint; without one the form carries no `action`
    pub action: Option<String>,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            heading: "Start your inquiry".into(),
            fields: vec![
                FormField::new("name", "Name", "Name", FieldKind::Text),
                FormField::new("email", "Email", "Email", FieldKind::Email),
                FormField::new("phone", "Phone (optional)", "Phone (optional)", FieldKind::Tel),
                FormField::new("eventDate", "Event Date", "Event Date", FieldKind::Date),
                FormField::new(
                    "message",
                    "Message",
                    "Tell us about your event / vision",
                    FieldKind::TextArea,
                ),
            ],
            submit_label: "Send Inquiry".into(),
            reply_note: "We typically reply within 2 business days.".into(),
            action: None,
        }
    }
}

/// Footer columns and copyright line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    /// Brand name in the first column
    pub brand: String,
    /// Line under the brand
    pub tagline: String,
    /// "Quick Links" column
    pub quick_links: Vec<Link>,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Name after the year in the copyright line
    pub copyright_holder: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand: "A Tiffany Affair".into(),
            tagline: "Luxury Event Planning & Décor Services".into(),
            quick_links: vec![
                Link::new("About", "/about"),
                Link::new("Services", "/services"),
                Link::new("Gallery", "/gallery"),
            ],
            email: "hello@atiffanyaffair.com".into(),
            phone: "(555) 555-5555".into(),
            copyright_holder: "A Tiffany Affair and Design".into(),
        }
    }
}

/// All content for one render of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    /// Document `<title>`
    pub title: String,
    /// Hero banner
    pub hero: HeroContent,
    /// About teaser
    pub about: AboutContent,
    /// Services grid
    pub services: ServicesContent,
    /// Portfolio grid
    pub portfolio: PortfolioContent,
    /// Testimonials
    pub testimonials: TestimonialsContent,
    /// Call-to-action banner
    pub cta: CtaContent,
    /// Contact form
    pub contact: ContactContent,
    /// Footer
    pub footer: FooterContent,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "A Tiffany Affair and Design".into(),
            hero: HeroContent::default(),
            about: AboutContent::default(),
            services: ServicesContent::default(),
            portfolio: PortfolioContent::default(),
            testimonials: TestimonialsContent::default(),
            cta: CtaContent::default(),
            contact: ContactContent::default(),
            footer: FooterContent::default(),
        }
    }
}
