//! Client-side shopping cart with explicit load/mutate/persist operations.
//!
//! The cart is a plain JSON list of products with quantities, persisted at a
//! fixed path. A [`CartStore`] is the single owner of that file for the
//! duration of an operation: callers load, mutate in memory, then persist.
//! There is no versioning or migration logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Product;

/// Errors produced by cart persistence.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cart file {path} is not valid JSON: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cart serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// One cart line: a product plus the selected quantity.
///
/// The product is flattened on the wire so the persisted shape stays
/// `{...product fields, "quantity": n}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// Owner of the persisted cart state.
#[derive(Debug)]
pub struct CartStore {
    path: PathBuf,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Loads the cart from `path`. A missing or empty file yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Io`] if the file exists but cannot be read, or
    /// [`CartError::Deserialize`] if its contents are not a valid cart list.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CartError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                items: Vec::new(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|source| CartError::Io {
            path: path.clone(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Self {
                path,
                items: Vec::new(),
            });
        }

        let items = serde_json::from_str(&raw).map_err(|source| CartError::Deserialize {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, items })
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds `quantity` units of `product`. An item with the same code
    /// accumulates quantity instead of duplicating the line.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.code == product.code) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    /// Sets the quantity for `code`; zero removes the line entirely.
    ///
    /// Returns `false` if no line with that code exists.
    pub fn set_quantity(&mut self, code: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(code);
        }
        match self.items.iter_mut().find(|i| i.product.code == code) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes the line for `code`. Returns `false` if it was not present.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product.code != code);
        self.items.len() != before
    }

    /// Cart total: sum of price × quantity. Lines without a price count as zero.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.price.unwrap_or(0.0) * f64::from(i.quantity))
            .sum()
    }

    /// Writes the current cart state back to its path.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Serialize`] or [`CartError::Io`] on failure.
    pub fn persist(&self) -> Result<(), CartError> {
        let json = serde_json::to_string_pretty(&self.items).map_err(CartError::Serialize)?;
        fs::write(&self.path, json).map_err(|source| CartError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(code: &str, price: f64) -> Product {
        let mut p = Product::new(code, format!("Producto {code}"));
        p.price = Some(price);
        p
    }

    #[test]
    fn load_missing_file_yields_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let cart = CartStore::load(dir.path().join("cart.json")).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn add_same_code_accumulates_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = CartStore::load(dir.path().join("cart.json")).unwrap();
        cart.add(priced("CX-01", 1000.0), 2);
        cart.add(priced("CX-01", 1000.0), 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = CartStore::load(dir.path().join("cart.json")).unwrap();
        cart.add(priced("CX-01", 1000.0), 2);
        assert!(cart.set_quantity("CX-01", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_unknown_code_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = CartStore::load(dir.path().join("cart.json")).unwrap();
        assert!(!cart.set_quantity("NOPE", 3));
    }

    #[test]
    fn total_sums_price_times_quantity_and_skips_unpriced() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = CartStore::load(dir.path().join("cart.json")).unwrap();
        cart.add(priced("CX-01", 1000.0), 2);
        cart.add(Product::new("YA25", "Conector YA25"), 4);
        let diff = (cart.total() - 2000.0).abs();
        assert!(diff < f64::EPSILON, "unexpected total: {}", cart.total());
    }

    #[test]
    fn persist_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut cart = CartStore::load(&path).unwrap();
        cart.add(priced("CX-01", 1000.0), 2);
        cart.remove("missing");
        cart.persist().unwrap();

        let reloaded = CartStore::load(&path).unwrap();
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].product.code, "CX-01");
        assert_eq!(reloaded.items()[0].quantity, 2);
    }
}
