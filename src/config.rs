//! Site-level configuration for the catalog page.
//!
//! Configuration is a small JSON document read once at startup:
//!
//! ```json
//! { "contact": { "channel": "email", "address": "info@mesamalzemecilik.com",
//!                "subject": "Ürün Bilgi Talebi" },
//!   "catalog_path": "data/products.json" }
//! ```
//!
//! Every field is optional; the defaults reproduce the live site (email
//! enquiries, built-in catalog).

use crate::catalog::ProductIndex;
use crate::contact::ContactChannel;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub contact: ContactChannel,
    /// Catalog file to load instead of the built-in catalog. Relative paths
    /// are resolved against the directory holding the config file.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl SiteConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing site config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("opening site config {}", path.display()))?;
        let mut config = Self::from_json_str(&text)
            .with_context(|| format!("loading site config {}", path.display()))?;
        if let (Some(catalog_path), Some(base)) = (config.catalog_path.as_mut(), path.parent()) {
            if catalog_path.is_relative() {
                *catalog_path = base.join(&*catalog_path);
            }
        }
        Ok(config)
    }

    /// Build the product index this configuration points at.
    pub fn load_catalog(&self) -> Result<ProductIndex> {
        match &self.catalog_path {
            Some(path) => ProductIndex::load(path),
            None => ProductIndex::builtin(),
        }
    }
}
