//! Detail-view markup for a single product.
//!
//! Rendering is a pure function of the record: the same record always yields
//! byte-identical markup. Buttons carry `data-action` attributes instead of
//! inline handlers; the modal dispatches them through one registered handler.

use crate::catalog::ProductRecord;
use std::borrow::Cow;
use std::fmt::{self, Write};

const FEATURES_HEADING: &str = "Özellikler";
const SIZES_HEADING: &str = "Boyut Seçenekleri";
const APPLICATIONS_HEADING: &str = "Kullanım Alanları";
const SPECIAL_BADGE: &str = "Özel";
const CONTACT_LABEL: &str = "İletişime Geç";
const CLOSE_LABEL: &str = "Kapat";

/// Buttons rendered into the detail view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DetailAction {
    Contact,
    Close,
}

impl DetailAction {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailAction::Contact => "contact",
            DetailAction::Close => "close",
        }
    }

    /// Map a `data-action` attribute value back to the action.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "contact" => Some(DetailAction::Contact),
            "close" => Some(DetailAction::Close),
            _ => None,
        }
    }
}

/// Render the full detail view for `product`.
pub fn render_detail(product: &ProductRecord) -> String {
    let mut out = String::with_capacity(2048);
    // Writing into a String cannot fail.
    let _ = write_detail(&mut out, product);
    out
}

fn write_detail(out: &mut String, product: &ProductRecord) -> fmt::Result {
    let id = escape_html(product.id.as_str());

    writeln!(out, r#"<div class="detail-product-card" data-product-id="{id}">"#)?;
    writeln!(out, r#"  <div class="detail-header">"#)?;
    writeln!(out, "    <h2>{}</h2>", escape_html(&product.title))?;
    writeln!(out, r#"    <div class="detail-badges">"#)?;
    writeln!(
        out,
        r#"      <span class="category-badge">{}</span>"#,
        escape_html(&product.category)
    )?;
    writeln!(
        out,
        r#"      <span class="type-badge">{}</span>"#,
        escape_html(&product.kind)
    )?;
    writeln!(out, "    </div>")?;
    writeln!(out, "  </div>")?;
    writeln!(out, r#"  <div class="detail-description">"#)?;
    writeln!(out, "    <p>{}</p>", escape_html(&product.description))?;
    writeln!(out, "  </div>")?;

    write_tag_section(
        out,
        FEATURES_HEADING,
        "features-grid",
        "feature-tag",
        &product.features,
    )?;
    write_sizes_section(out, product)?;
    write_tag_section(
        out,
        APPLICATIONS_HEADING,
        "applications-grid",
        "app-tag",
        &product.applications,
    )?;

    writeln!(out, r#"  <div class="detail-actions">"#)?;
    writeln!(
        out,
        r#"    <button class="btn btn-primary" data-action="{}" data-product-id="{id}">{CONTACT_LABEL}</button>"#,
        DetailAction::Contact.as_str()
    )?;
    writeln!(
        out,
        r#"    <button class="btn btn-secondary" data-action="{}">{CLOSE_LABEL}</button>"#,
        DetailAction::Close.as_str()
    )?;
    writeln!(out, "  </div>")?;
    writeln!(out, "</div>")
}

fn write_tag_section(
    out: &mut String,
    heading: &str,
    grid: &str,
    tag: &str,
    items: &[String],
) -> fmt::Result {
    writeln!(out, r#"  <div class="detail-section">"#)?;
    writeln!(out, "    <h3>{heading}</h3>")?;
    writeln!(out, r#"    <div class="{grid}">"#)?;
    for item in items {
        writeln!(out, r#"      <span class="{tag}">{}</span>"#, escape_html(item))?;
    }
    writeln!(out, "    </div>")?;
    writeln!(out, "  </div>")
}

fn write_sizes_section(out: &mut String, product: &ProductRecord) -> fmt::Result {
    writeln!(out, r#"  <div class="detail-section">"#)?;
    writeln!(out, "    <h3>{SIZES_HEADING}</h3>")?;
    writeln!(out, r#"    <div class="size-grid">"#)?;
    for size in &product.sizes {
        let class = if size.special {
            "size-option special"
        } else {
            "size-option"
        };
        writeln!(out, r#"      <div class="{class}">"#)?;
        writeln!(out, r#"        <div class="size-info">"#)?;
        writeln!(
            out,
            r#"          <span class="size-name">{}</span>"#,
            escape_html(&size.size)
        )?;
        if size.special {
            writeln!(
                out,
                r#"          <span class="special-badge">{SPECIAL_BADGE}</span>"#
            )?;
        }
        writeln!(out, "        </div>")?;
        writeln!(out, r#"        <div class="size-details">"#)?;
        writeln!(
            out,
            r#"          <span class="size-stock">{}</span>"#,
            escape_html(&size.stock)
        )?;
        writeln!(
            out,
            r#"          <span class="size-price">{}</span>"#,
            escape_html(&size.price)
        )?;
        writeln!(out, "        </div>")?;
        writeln!(out, "      </div>")?;
    }
    writeln!(out, "    </div>")?;
    writeln!(out, "  </div>")
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
