//! Indexed view of the product catalog.
//!
//! The index enforces the expected catalog schema version and provides fast
//! lookup by product id. It is strict about duplicates and blank entries so
//! the page never renders a half-filled detail view.

use crate::catalog::identity::{ProductId, is_valid_key};
use crate::catalog::model::{ProductCatalog, ProductRecord, parse_catalog};
use crate::error::CatalogError;
use crate::schema_loader::{
    SchemaLoadOptions, SchemaLoadResult, load_json_schema_from_path, load_json_schema_from_str,
};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

// Only one catalog layout exists; anything else is rejected before indexing.
const DEFAULT_SCHEMA_VERSION: &str = "product_catalog_v1";
const SCHEMA_FILE: &str = "schema/product_catalog.schema.json";

const BUILTIN_CATALOG: &str = include_str!("../../data/products.json");
const BUILTIN_SCHEMA: &str = include_str!("../../schema/product_catalog.schema.json");

#[derive(Debug, Clone)]
/// Product catalog plus a derived index keyed by product id.
pub struct ProductIndex {
    schema_version: String,
    products: Vec<ProductRecord>,
    by_id: BTreeMap<ProductId, usize>,
}

impl ProductIndex {
    /// Build the index from the catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG).context("loading built-in product catalog")
    }

    /// Load and validate a catalog from disk.
    ///
    /// A `schema/product_catalog.schema.json` beside the catalog's parent
    /// directory takes precedence over the bundled schema.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("opening catalog {}", path.display()))?;
        let schema = load_schema(resolve_catalog_schema_path(path).as_deref())?;
        Self::build(&text, &path.display().to_string(), &schema)
            .with_context(|| format!("loading {}", path.display()))
    }

    /// Parse and validate catalog JSON held in memory.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::build(text, "product catalog", &load_schema(None)?)
    }

    fn build(text: &str, origin: &str, schema: &SchemaLoadResult) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).with_context(|| format!("parsing catalog {origin}"))?;
        schema.validate(&value, origin)?;

        let catalog = parse_catalog(text)?;
        validate_schema_version(&catalog.schema_version)?;
        let by_id = build_index(&catalog)?;
        tracing::debug!(
            origin,
            schema = %schema.schema_version,
            products = catalog.products.len(),
            "loaded product catalog"
        );
        Ok(Self {
            schema_version: catalog.schema_version,
            products: catalog.products,
            by_id,
        })
    }

    /// Resolve a product by id.
    pub fn get_product(&self, id: &str) -> Result<&ProductRecord, CatalogError> {
        self.by_id
            .get(id)
            .map(|&slot| &self.products[slot])
            .ok_or_else(|| CatalogError::ProductNotFound(ProductId::from(id)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterates product ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.products.iter().map(|product| &product.id)
    }

    /// All records in catalog order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }
}

/// Compile the schema at `path`, or the bundled copy when no override exists.
fn load_schema(path: Option<&Path>) -> Result<SchemaLoadResult> {
    let allowed = allowed_schema_versions();
    let options = SchemaLoadOptions {
        allowed_versions: Some(&allowed),
        ..Default::default()
    };
    match path {
        Some(schema_path) => load_json_schema_from_path(schema_path, options)
            .with_context(|| format!("loading catalog schema {}", schema_path.display())),
        None => load_json_schema_from_str(BUILTIN_SCHEMA, "bundled product catalog schema", options),
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !is_valid_key(schema_version) {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    BTreeSet::from_iter([DEFAULT_SCHEMA_VERSION.to_string()])
}

fn build_index(catalog: &ProductCatalog) -> Result<BTreeMap<ProductId, usize>> {
    if catalog.products.is_empty() {
        bail!("catalog contains no products");
    }

    let mut map = BTreeMap::new();
    for (slot, product) in catalog.products.iter().enumerate() {
        if product.id.0.trim().is_empty() {
            bail!("encountered product with no id");
        }
        if !is_valid_key(&product.id.0) {
            bail!("product id '{}' must match ^[A-Za-z0-9_.-]+$", product.id);
        }
        if map.contains_key(&product.id) {
            bail!("duplicate product id {}", product.id);
        }
        if product.title.trim().is_empty() {
            bail!("product {} has an empty title", product.id);
        }
        if product.features.iter().any(|entry| entry.trim().is_empty()) {
            bail!("product {} lists an empty feature", product.id);
        }
        if product
            .applications
            .iter()
            .any(|entry| entry.trim().is_empty())
        {
            bail!("product {} lists an empty application", product.id);
        }
        if product.sizes.iter().any(|size| size.size.trim().is_empty()) {
            bail!("product {} lists a size with no label", product.id);
        }
        map.insert(product.id.clone(), slot);
    }
    Ok(map)
}

fn resolve_catalog_schema_path(catalog_path: &Path) -> Option<PathBuf> {
    let base = catalog_path.parent().and_then(|p| p.parent())?;
    let candidate = base.join(SCHEMA_FILE);
    candidate.is_file().then_some(candidate)
}
