#![allow(dead_code)]

use anyhow::{Context, Result};
use mesa_catalog::{ContactHandoff, Handoff, ModalSurface};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Modal container double that records what the page would have seen.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub markup: Option<String>,
    pub visible: bool,
    pub scroll_locked: bool,
    pub log: Vec<String>,
}

impl ModalSurface for RecordingSurface {
    fn show(&mut self, markup: &str) {
        self.markup = Some(markup.to_string());
        self.visible = true;
        self.log.push("show".into());
    }

    fn hide(&mut self) {
        self.visible = false;
        self.log.push("hide".into());
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.log.push(format!("scroll_locked={locked}"));
    }
}

#[derive(Debug, Default)]
pub struct Outbox {
    pub sent: Vec<Handoff>,
}

impl ContactHandoff for Outbox {
    fn hand_off(&mut self, handoff: &Handoff) {
        self.sent.push(handoff.clone());
    }
}

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Lay out `<tmp>/data/products.json` (and optionally a schema override under
/// `<tmp>/schema/`) the way the repository does.
pub fn write_catalog_tree(catalog: &str, schema: Option<&str>) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new().context("failed to allocate catalog dir")?;
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir)?;
    let catalog_path = data_dir.join("products.json");
    fs::write(&catalog_path, catalog)?;
    if let Some(schema) = schema {
        let schema_dir = dir.path().join("schema");
        fs::create_dir_all(&schema_dir)?;
        fs::write(schema_dir.join("product_catalog.schema.json"), schema)?;
    }
    Ok((dir, catalog_path))
}

pub fn read_repo_file(relative: &str) -> Result<String> {
    let path = repo_root().join(relative);
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// A one-product catalog in the shipped format.
pub fn single_product_catalog(id: &str, title: &str) -> String {
    format!(
        r#"{{
  "schema_version": "product_catalog_v1",
  "products": [
    {{
      "id": "{id}",
      "title": "{title}",
      "category": "Streç Film",
      "type": "Şeffaf",
      "description": "Deneme ürünü.",
      "features": ["Esnek"],
      "sizes": [{{ "size": "50 cm", "stock": "10+ adet", "price": "İletişim" }}],
      "applications": ["Paletleme"]
    }}
  ]
}}"#
    )
}
