//! Error type surfaced by catalog lookups.
//!
//! Loading and configuration problems are reported through `anyhow`; the one
//! error a running page can hit is a trigger carrying an id the catalog does
//! not know.

use crate::catalog::ProductId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record is registered under the requested id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}
