// Centralized integration suite for the catalog subsystem; exercises catalog
// loading, detail rendering, the modal state machine, and contact handoff
// through the public API so regressions surface in one place.
mod support;

use anyhow::{Result, bail};
use mesa_catalog::{
    CatalogError, ContactChannel, DetailAction, ModalEvent, ModalViewState, ProductFilter,
    ProductId, ProductIndex, ProductModal, SiteConfig, contact_for_product, filter_products,
    render_detail,
};
use std::fs;
use support::{
    Outbox, RecordingSurface, read_repo_file, single_product_catalog, write_catalog_tree,
};

fn modal(catalog: &ProductIndex) -> ProductModal<'_, RecordingSurface, Outbox> {
    ProductModal::new(
        catalog,
        RecordingSurface::default(),
        Outbox::default(),
        ContactChannel::default(),
    )
}

// Every id the catalog lists resolves to a record carrying that same id.
#[test]
fn lookup_returns_matching_record_for_every_id() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    for id in catalog.ids() {
        let record = catalog.get_product(id.as_str())?;
        assert_eq!(&record.id, id);
    }
    Ok(())
}

#[test]
fn torba_seffaf_record_matches_site_copy() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let record = catalog.get_product("aspirin-torba-seffaf")?;
    assert_eq!(record.title, "ASPİRİN NAYLON TORBA ŞEFFAF");
    assert_eq!(record.category, "Naylon Torba");
    assert_eq!(record.kind, "Şeffaf Torba");
    assert_eq!(record.sizes.len(), 4);
    assert_eq!(record.sizes[3].size, "Jumbo Boy");
    Ok(())
}

// Only the two-layer eco variant is flagged special, and the markup reflects
// exactly that one entry.
#[test]
fn eko_seffaf_has_single_special_size() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let record = catalog.get_product("aspirin-eko-seffaf")?;
    let special: Vec<_> = record.special_sizes().map(|s| s.size.as_str()).collect();
    assert_eq!(special, vec!["120 cm (2 Katlı)"]);

    let markup = render_detail(record);
    assert_eq!(markup.matches(r#"class="size-option special""#).count(), 1);
    assert_eq!(markup.matches(r#"class="special-badge""#).count(), 1);
    assert_eq!(markup.matches(r#"class="size-option"#).count(), 7);

    let others = catalog
        .products()
        .iter()
        .filter(|p| p.id.as_str() != "aspirin-eko-seffaf");
    for product in others {
        assert_eq!(product.special_sizes().count(), 0, "{}", product.id);
    }
    Ok(())
}

#[test]
fn render_is_deterministic() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    for product in catalog.products() {
        assert_eq!(render_detail(product), render_detail(&product.clone()));
    }
    Ok(())
}

#[test]
fn rendered_sections_follow_record_order() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let record = catalog.get_product("aspirin-seffaf")?;
    let markup = render_detail(record);

    let headings = ["<h2>", "Özellikler", "Boyut Seçenekleri", "Kullanım Alanları"];
    let mut last = 0;
    for heading in headings {
        let Some(pos) = markup.find(heading) else {
            bail!("missing {heading} in markup");
        };
        assert!(pos >= last, "{heading} out of order");
        last = pos;
    }

    let first = markup.find("100 cm").unwrap_or(usize::MAX);
    let second = markup.find("200 cm").unwrap_or(0);
    assert!(first < second);
    assert!(markup.contains("İletişime Geç"));
    assert!(markup.contains("Kapat"));
    Ok(())
}

#[test]
fn unknown_id_is_reported_and_modal_stays_closed() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    match catalog.get_product("aspirin-mavi") {
        Err(CatalogError::ProductNotFound(id)) => assert_eq!(id, ProductId::from("aspirin-mavi")),
        Ok(record) => bail!("unexpected record {}", record.id),
    }

    let mut modal = modal(&catalog);
    assert!(!modal.open_modal("aspirin-mavi"));
    assert_eq!(modal.state(), &ModalViewState::default());
    assert!(modal.surface().log.is_empty());
    Ok(())
}

#[test]
fn open_then_close_restores_scrolling() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let mut modal = modal(&catalog);

    assert!(modal.open_modal("aspirin-torba-seffaf"));
    assert!(modal.is_open());
    assert!(modal.surface().visible);
    assert!(modal.surface().scroll_locked);
    let shown = modal.surface().markup.clone().unwrap_or_default();
    assert!(shown.contains("ASPİRİN NAYLON TORBA ŞEFFAF"));

    assert!(modal.close_modal());
    assert!(!modal.is_open());
    assert!(!modal.surface().visible);
    assert!(!modal.surface().scroll_locked);
    assert_eq!(modal.state().visible_product_id, None);
    Ok(())
}

#[test]
fn close_is_idempotent() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let mut modal = modal(&catalog);
    modal.open_modal("aspirin-renkli");

    assert!(modal.close_modal());
    let state_after_one = modal.state().clone();
    let log_after_one = modal.surface().log.clone();

    assert!(!modal.close_modal());
    assert_eq!(modal.state(), &state_after_one);
    assert_eq!(modal.surface().log, log_after_one);
    Ok(())
}

// Replacing the visible product tears the old view down before the new one
// goes up: one slot, never two overlapping views.
#[test]
fn switching_products_closes_previous_view_first() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let mut modal = modal(&catalog);
    modal.handle_event(ModalEvent::Trigger {
        product_id: "aspirin-seffaf",
    });
    modal.handle_event(ModalEvent::Trigger {
        product_id: "aspirin-eko-seffaf",
    });

    assert_eq!(
        modal.surface().log,
        vec![
            "show",
            "scroll_locked=true",
            "hide",
            "scroll_locked=false",
            "show",
            "scroll_locked=true",
        ]
    );
    assert_eq!(
        modal.visible_product().map(|p| p.title.as_str()),
        Some("ASPİRİN EKO GRUBU ŞEFFAF")
    );
    Ok(())
}

#[test]
fn escape_only_closes_an_open_modal() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let mut modal = modal(&catalog);
    modal.handle_event(ModalEvent::KeyDown { key: "Escape" });
    assert!(modal.surface().log.is_empty());

    modal.open_modal("aspirin-super-eko");
    modal.handle_event(ModalEvent::KeyDown { key: "Escape" });
    assert!(!modal.is_open());
    Ok(())
}

#[test]
fn contact_handoff_embeds_title() -> Result<()> {
    let title = "ASPİRİN SÜPER EKO GRUBU";
    let handoff = contact_for_product(&ContactChannel::default(), title);
    assert!(handoff.message.contains(title));
    let escaped_message = urlencoding::encode(&handoff.message).into_owned();
    assert!(handoff.url.ends_with(&format!("&body={escaped_message}")));
    assert!(handoff.url.contains("ASP%C4%B0R%C4%B0N%20S%C3%9CPER%20EKO%20GRUBU"));

    let catalog = ProductIndex::builtin()?;
    let mut modal = modal(&catalog);
    modal.open_modal("aspirin-super-eko");
    modal.handle_event(ModalEvent::Action(DetailAction::Contact));
    assert_eq!(modal.handoff().sent, vec![handoff]);
    Ok(())
}

#[test]
fn catalog_loads_from_disk_with_bundled_schema() -> Result<()> {
    let (_dir, path) = write_catalog_tree(&single_product_catalog("strec-film", "STREÇ FİLM"), None)?;
    let catalog = ProductIndex::load(&path)?;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get_product("strec-film")?.title, "STREÇ FİLM");
    Ok(())
}

// A schema placed next to the catalog tree takes precedence over the bundled
// one.
#[test]
fn catalog_schema_override_is_honored() -> Result<()> {
    let schema = read_repo_file("schema/product_catalog.schema.json")?
        .replace(r#""minItems": 1"#, r#""minItems": 2"#);
    let (_dir, path) = write_catalog_tree(
        &single_product_catalog("strec-film", "STREÇ FİLM"),
        Some(&schema),
    )?;
    let err = ProductIndex::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed schema validation"));
    Ok(())
}

#[test]
fn shipped_catalog_file_matches_builtin() -> Result<()> {
    let from_disk = ProductIndex::load(&support::repo_root().join("data/products.json"))?;
    let builtin = ProductIndex::builtin()?;
    assert_eq!(from_disk.products(), builtin.products());
    Ok(())
}

#[test]
fn malformed_catalog_reports_path() -> Result<()> {
    let (_dir, path) = write_catalog_tree("{ not json", None)?;
    let err = ProductIndex::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains(&path.display().to_string()));
    Ok(())
}

#[test]
fn site_config_resolves_relative_catalog_path() -> Result<()> {
    let (dir, _path) = write_catalog_tree(&single_product_catalog("strec-film", "STREÇ FİLM"), None)?;
    let config_path = dir.path().join("site.json");
    fs::write(
        &config_path,
        r#"{"catalog_path":"data/products.json",
            "contact":{"channel":"whatsapp","phone":"905001112233"}}"#,
    )?;

    let config = SiteConfig::load(&config_path)?;
    let catalog = config.load_catalog()?;
    assert_eq!(catalog.ids().count(), 1);

    let mut modal = ProductModal::new(
        &catalog,
        RecordingSurface::default(),
        support::Outbox::default(),
        config.contact.clone(),
    );
    modal.open_modal("strec-film");
    let handoff = modal.contact_visible_product();
    assert!(
        handoff
            .map(|h| h.url.starts_with("https://wa.me/905001112233?text="))
            .unwrap_or(false)
    );
    Ok(())
}

#[test]
fn filter_by_category_from_catalog() -> Result<()> {
    let catalog = ProductIndex::builtin()?;
    let outcome = filter_products(&catalog, &ProductFilter::parse("Naylon Aspirin"));
    assert_eq!(outcome.visible.len(), 2);
    assert!(outcome.notice.is_none());
    Ok(())
}
