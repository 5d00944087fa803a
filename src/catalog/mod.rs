use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Category, Product};

pub const PRODUCTS_FILE: &str = "products.json";
pub const CATEGORIES_FILE: &str = "categories.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate category name '{0}'")]
    DuplicateCategory(String),

    #[error("product {product_id} references unknown category '{category}'")]
    OrphanedCategory { product_id: i64, category: String },
}

/// What to do when a product's `category` names no known category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceCheck {
    Off,
    /// Log each orphan and keep loading.
    #[default]
    Warn,
    /// Refuse to load.
    Strict,
}

impl FromStr for ReferenceCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown reference check '{}' (expected off, warn or strict)",
                other
            )),
        }
    }
}

/// Immutable in-memory catalog. Built once at startup, shared behind an `Arc`.
///
/// - `products`   → source order, duplicates by id tolerated (first wins on lookup)
/// - `categories` → `IndexMap` keyed by name: source order plus unique names
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: IndexMap<String, Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut by_name = IndexMap::with_capacity(categories.len());
        for category in categories {
            if by_name.contains_key(&category.name) {
                return Err(CatalogError::DuplicateCategory(category.name));
            }
            by_name.insert(category.name.clone(), category);
        }

        Ok(Self {
            products,
            categories: by_name,
        })
    }

    /// Parse both collections from JSON text and apply the reference check.
    pub fn from_json(
        products_json: &str,
        categories_json: &str,
        check: ReferenceCheck,
    ) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(products_json).map_err(|source| CatalogError::Parse {
                what: PRODUCTS_FILE,
                source,
            })?;
        let categories: Vec<Category> =
            serde_json::from_str(categories_json).map_err(|source| CatalogError::Parse {
                what: CATEGORIES_FILE,
                source,
            })?;

        let catalog = Self::new(products, categories)?;
        catalog.check_references(check)?;
        Ok(catalog)
    }

    /// Read `products.json` and `categories.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>, check: ReferenceCheck) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let products_json = read(&dir.join(PRODUCTS_FILE))?;
        let categories_json = read(&dir.join(CATEGORIES_FILE))?;

        let catalog = Self::from_json(&products_json, &categories_json, check)?;

        info!(
            dir = %dir.display(),
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.categories.values()
    }

    pub(crate) fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    fn check_references(&self, check: ReferenceCheck) -> Result<(), CatalogError> {
        if check == ReferenceCheck::Off {
            return Ok(());
        }

        for product in &self.products {
            if crate::queries::categories::exists(self, &product.category) {
                continue;
            }
            if check == ReferenceCheck::Strict {
                return Err(CatalogError::OrphanedCategory {
                    product_id: product.id,
                    category: product.category.clone(),
                });
            }
            warn!(
                product_id = product.id,
                category = %product.category,
                "Product references unknown category"
            );
        }
        Ok(())
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
