use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder image URL used when a product has no image of its own.
pub const DEFAULT_IMAGE: &str = "https://via.placeholder.com/180x120?text=Sin+Imagen";

/// Catalog of products keyed by product code.
///
/// A `BTreeMap` keeps iteration deterministic, which the submission driver
/// relies on for stable pass ordering and reproducible logs.
pub type Catalog = BTreeMap<String, Product>;

/// A product as exchanged with the remote Product API.
///
/// `code` is the sole identity; everything else is a mutable attribute.
/// Optional string fields use `None` for "absent" — empty strings from
/// spreadsheet cells are normalized away at the import boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Product category, e.g. `"CABLE"` or `"CONECTOR"`. Wire name `type`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default)]
    pub compatibles: Vec<CompatibleEdge>,
}

/// A directed compatibility edge from a principal product to a named
/// accessory slot filled by the product identified by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibleEdge {
    pub code: String,
    /// Human-readable slot name, e.g. `"Conector mecanico 1"`. Wire name `type`.
    #[serde(rename = "type")]
    pub slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet: Option<String>,
}

impl Product {
    /// Creates a product with only its identity fields set.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            brand: None,
            provider: None,
            group: None,
            line: None,
            product_type: None,
            image: None,
            datasheet: None,
            price: None,
            stock: None,
            compatibles: Vec::new(),
        }
    }

    /// Returns `true` if an edge targeting `code` is already present.
    #[must_use]
    pub fn has_compatible(&self, code: &str) -> bool {
        self.compatibles.iter().any(|e| e.code == code)
    }

    /// Appends an edge unless one with the same target code exists.
    ///
    /// Deduplication is by target `code` only, not by full edge content.
    /// Returns `true` if the edge was appended.
    pub fn add_compatible(&mut self, edge: CompatibleEdge) -> bool {
        if self.has_compatible(&edge.code) {
            return false;
        }
        self.compatibles.push(edge);
        true
    }
}

/// Trims `value` and converts an empty result to `None`.
#[must_use]
pub fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
