//! Product catalog wiring.
//!
//! This module wraps the JSON catalog under `data/products.json` so the modal
//! and filter can work from one validated, immutable snapshot. Types here
//! mirror the schema fields; callers use `ProductIndex` for lookups.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::ProductId;
pub use index::ProductIndex;
pub use model::{ProductCatalog, ProductRecord, SizeOption, load_catalog_from_path, parse_catalog};
