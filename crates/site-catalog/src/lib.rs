//! Static content model for the Vitrina marketing site.
//!
//! Everything here is DOM-free and runs on any target: the per-section
//! content table, the product types rendered into the grid and the detail
//! modal, slideshow index arithmetic, and the contact-request payload.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod slides;

pub use catalog::{Catalog, CatalogEntry, Feature, FeatureIcon, Product};
pub use contact::{quote_message, ContactRequest, INTEREST_OPTIONS, WHATSAPP_NUMBER};
pub use slides::wrap_slide;
