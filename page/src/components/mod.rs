//! Leptos UI components for the homepage.
//!
//! Each section is a `#[component]` function taking its own slice of
//! [`crate::types::PageContent`]. Repeated blocks (service cards, portfolio
//! figures, testimonial quotes) are rendered in declaration order and carry
//! their array index as `data-key`.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── HeroSection          (header, nav, animated intro block)
//! └── main
//!     ├── AboutTeaser
//!     ├── ServicesGrid
//!     │   └── ServiceCard × n
//!     ├── PortfolioGrid
//!     │   └── PortfolioFigure × n
//!     ├── TestimonialsStrip
//!     │   └── TestimonialCard × n
//!     ├── CallToAction
//!     ├── ContactForm
//!     │   └── InquiryField × n
//!     └── PageFooter
//! ```
//!
//! # Usage
//!
//! Components are normally used via [`crate::render_page`], but any section
//! can be rendered on its own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use tiffany_page::components::ServicesGrid;
//! use tiffany_page::types::ServicesContent;
//!
//! view! { <ServicesGrid content=ServicesContent::default() /> }
//! ```

mod about;
mod contact;
mod cta;
mod document;
mod footer;
mod hero;
mod icons;
mod portfolio;
mod services;
mod testimonials;

pub use about::AboutTeaser;
pub use contact::ContactForm;
pub use cta::CallToAction;
pub use document::PageDocument;
pub use footer::PageFooter;
pub use hero::HeroSection;
pub use icons::*;
pub use portfolio::PortfolioGrid;
pub use services::ServicesGrid;
pub use testimonials::TestimonialsStrip;
