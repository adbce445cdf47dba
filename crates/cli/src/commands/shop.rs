//! Shop page commands over a catalog file.
//!
//! A catalog file is JSON:
//!
//! ```json
//! {
//!   "filters": [{"filter": "all", "active": true}, {"filter": "women"}],
//!   "products": [
//!     {"name": "Wrap Dress", "price": "₦18,500", "category": "women",
//!      "status": "new", "badge_class": "badge-new", "sizes": ["S", "M"]}
//!   ]
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stallfront_core::{FilterButton, ProductCard};
use stallfront_storefront::{ShopPage, StorefrontConfig};
use thiserror::Error;

use super::{ConsoleNotifier, open_store};

/// Errors that can occur when reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File is not a valid catalog.
    #[error("Invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No product at the requested position.
    #[error("No product at position {0}")]
    NoSuchProduct(usize),
}

/// Catalog file contents.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// Filter bar buttons; empty means a single "all" filter.
    #[serde(default)]
    pub filters: Vec<FilterButton>,
    /// Product cards in display order.
    pub products: Vec<ProductCard>,
}

impl Catalog {
    /// Parse catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a valid catalog.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text).map_err(|source| CatalogError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

/// Print the products visible under `filter` (or the catalog's initial filter).
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be loaded.
#[allow(clippy::print_stdout)]
pub fn list(
    config: &StorefrontConfig,
    catalog: &Path,
    filter: Option<&str>,
) -> Result<(), CatalogError> {
    let catalog = Catalog::load(catalog)?;
    let mut page = ShopPage::new(open_store(config), catalog.products, &catalog.filters);
    if filter.is_some() {
        page.apply_filter(filter);
    }

    for (index, (card, visible)) in page.cards().iter().zip(page.visibility()).enumerate() {
        if !visible {
            continue;
        }
        let item = card.to_cart_item();
        let badge = card
            .badge()
            .map(|b| format!(" [{}]", b.label))
            .unwrap_or_default();
        let sizes = if card.sizes.is_empty() {
            String::new()
        } else {
            format!(" ({})", card.sizes.join("/"))
        };
        println!(
            "[{index}] {} - {} {}{sizes}{badge}",
            item.name(),
            config.currency,
            item.price()
        );
    }
    Ok(())
}

/// Add the product at `index` to the cart.
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be loaded or has no such product.
pub fn add_product(
    config: &StorefrontConfig,
    catalog: &Path,
    index: usize,
) -> Result<(), CatalogError> {
    let catalog = Catalog::load(catalog)?;
    let mut page = ShopPage::new(open_store(config), catalog.products, &catalog.filters);
    page.add_to_cart(index, &mut ConsoleNotifier)
        .map(|_| ())
        .ok_or(CatalogError::NoSuchProduct(index))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::parse(
            r#"{
                "filters": [{"filter": "all"}, {"filter": "women", "active": true}],
                "products": [
                    {"name": "Wrap Dress", "price": "₦18,500", "category": "women"},
                    {"name": "Linen Shirt", "price": "₦12,000", "category": "men"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(
            FilterButton::initial(&catalog.filters),
            stallfront_core::Filter::Category("women".to_owned())
        );
    }

    #[test]
    fn test_parse_catalog_without_filters() {
        let catalog = Catalog::parse(r#"{"products": []}"#).unwrap();
        assert!(catalog.filters.is_empty());
    }

    #[test]
    fn test_add_product_writes_cart_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(
            &catalog_path,
            r#"{"products": [{"name": "Wrap Dress", "price": "₦18,500"}]}"#,
        )
        .unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().join("data"),
            ..StorefrontConfig::default()
        };

        add_product(&config, &catalog_path, 0).unwrap();
        assert!(matches!(
            add_product(&config, &catalog_path, 3),
            Err(CatalogError::NoSuchProduct(3))
        ));

        assert_eq!(open_store(&config).load().len(), 1);
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
