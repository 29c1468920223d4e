//! Product catalogs.
//!
//! A catalog is the set of products a page offers, loaded from a YAML
//! fixture. It stands in for the attribute data product cards carry and
//! hands out ready-made trigger payloads.

use std::{collections::hash_map, fs, path::Path};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    products::{PriceError, ProductId, parse_unit_price},
    triggers::TriggerPayload,
};

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A product's price failed validation (product id, cause)
    #[error("Invalid price for product {0}: {1}")]
    InvalidPrice(ProductId, #[source] PriceError),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: FxHashMap<ProductId, CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    price: String,
}

/// One product available to add.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    /// Display name.
    pub name: String,

    /// Unit price.
    pub unit_price: Decimal,
}

/// The products a page offers, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: FxHashMap<ProductId, CatalogProduct>,
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, or
    /// if a price fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML text.
    ///
    /// Prices are validated at load time, so every product handed out later
    /// carries a usable amount.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML does not parse or a price
    /// fails validation.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(contents)?;
        let mut products = FxHashMap::default();

        for (id, entry) in file.products {
            let unit_price = parse_unit_price(&entry.price)
                .map_err(|err| CatalogError::InvalidPrice(id.clone(), err))?;

            products.insert(
                id,
                CatalogProduct {
                    name: entry.name,
                    unit_price,
                },
            );
        }

        Ok(Catalog { products })
    }

    /// Look up a product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::ProductNotFound`] if the id is not in the
    /// catalog.
    pub fn product(&self, id: &ProductId) -> Result<&CatalogProduct, CatalogError> {
        self.products
            .get(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))
    }

    /// Build the trigger payload a product card would carry.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::ProductNotFound`] if the id is not in the
    /// catalog.
    pub fn trigger_payload(&self, id: &ProductId) -> Result<TriggerPayload, CatalogError> {
        let product = self.product(id)?;

        Ok(TriggerPayload::new(
            id.as_str(),
            product.name.clone(),
            product.unit_price.to_string(),
        ))
    }

    /// Number of products on offer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over the products in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, ProductId, CatalogProduct> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = (&'a ProductId, &'a CatalogProduct);
    type IntoIter = hash_map::Iter<'a, ProductId, CatalogProduct>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
