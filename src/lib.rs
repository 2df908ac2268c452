//! Product catalog and detail modal for the Mesa Malzemecilik catalog site.
//!
//! The crate holds the one part of the site with real structure: a fixed
//! catalog of product records, the markup for a product's detail view, and
//! the single modal that shows it. Everything here is synchronous and runs on
//! the page's event thread; the DOM itself stays behind the `ModalSurface`
//! and `ContactHandoff` traits.
//!
//! Startup loads the catalog once (`ProductIndex::builtin` or via
//! `SiteConfig::load_catalog`) and hands a shared reference to
//! `ProductModal`, which owns the modal container for the life of the page.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod contact_form;
pub mod error;
pub mod filter;
pub mod modal;
pub mod render;
mod schema_loader;

pub use catalog::{
    ProductCatalog, ProductId, ProductIndex, ProductRecord, SizeOption, load_catalog_from_path,
    parse_catalog,
};
pub use config::SiteConfig;
pub use contact::{ContactChannel, ContactHandoff, Handoff, contact_for_product, contact_message};
pub use contact_form::{
    ContactSubmission, FieldError, FormErrors, is_valid_email, validate_submission,
};
pub use error::CatalogError;
pub use filter::{FilterOutcome, ProductFilter, filter_products};
pub use modal::{ModalEvent, ModalSurface, ModalViewState, ProductModal};
pub use render::{DetailAction, render_detail};
