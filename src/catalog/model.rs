//! Deserializable representation of `data/products.json`.
//!
//! The types mirror the catalog schema so the index, renderer and filter can
//! work with typed records instead of ad-hoc JSON. Use `ProductIndex` for
//! validation and id lookup; these structs carry no invariants of their own.

use crate::catalog::identity::ProductId;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// Full product catalog as stored on disk.
pub struct ProductCatalog {
    pub schema_version: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One product shown on the catalog page and in the detail modal.
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    #[serde(default)]
    pub applications: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A purchasable size with its stock and price labels.
pub struct SizeOption {
    pub size: String,
    pub stock: String,
    pub price: String,
    /// Sizes flagged here get distinct visual treatment (e.g. a two-layer variant).
    #[serde(default)]
    pub special: bool,
}

impl ProductRecord {
    /// Sizes flagged as special, in catalog order.
    pub fn special_sizes(&self) -> impl Iterator<Item = &SizeOption> {
        self.sizes.iter().filter(|size| size.special)
    }
}

/// Parse a product catalog from JSON text without additional validation.
pub fn parse_catalog(text: &str) -> Result<ProductCatalog> {
    let catalog: ProductCatalog = serde_json::from_str(text)?;
    Ok(catalog)
}

/// Read and parse a product catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<ProductCatalog> {
    let data = fs::read_to_string(path)?;
    parse_catalog(&data)
}
