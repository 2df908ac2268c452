//! Category filter for the product grid.

use crate::catalog::{ProductIndex, ProductRecord};

/// Shown in place of the grid when a category filter matches nothing.
pub const NO_PRODUCTS_NOTICE: &str = "Bu kategoride henüz ürün bulunmamaktadır.";

const ALL_FILTER: &str = "all";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductFilter {
    All,
    Category(String),
}

impl ProductFilter {
    /// Interpret a filter button's `data-filter` value.
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILTER {
            ProductFilter::All
        } else {
            ProductFilter::Category(value.to_string())
        }
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Category(category) => product.category == *category,
        }
    }
}

#[derive(Debug)]
/// Products left visible by a filter, plus the notice to show when none are.
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a ProductRecord>,
    pub notice: Option<&'static str>,
}

/// Apply `filter` to the catalog, keeping catalog order.
pub fn filter_products<'a>(catalog: &'a ProductIndex, filter: &ProductFilter) -> FilterOutcome<'a> {
    let visible: Vec<&ProductRecord> = catalog
        .products()
        .iter()
        .filter(|product| filter.matches(product))
        .collect();
    let notice = (visible.is_empty() && *filter != ProductFilter::All).then_some(NO_PRODUCTS_NOTICE);
    tracing::debug!(?filter, visible = visible.len(), "filtered product grid");
    FilterOutcome { visible, notice }
}
