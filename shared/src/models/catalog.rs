//! Catalog Model
//!
//! Static storefront tables: catalog items, cup sizes, add-ons and the
//! regional ("Paraense Raiz") products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Fixed recipe (açaí pronto)
    ReadyMade,
    /// Build-your-own (monte o seu)
    Custom,
}

/// Sellable product definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    /// Opaque image reference, resolved by the client
    pub image: String,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

impl CatalogItem {
    /// Card label, e.g. `A partir de R$ 12`
    pub fn price_label(&self) -> String {
        format!("A partir de R$ {}", self.base_price.normalize())
    }
}

/// Cup size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub key: String,
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Number of complements included with this size
    pub complement_allowance: u32,
}

/// Optional paid ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnOption {
    /// Lookup key, unique across the add-on table
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Regional product sold through an inquiry link only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalProduct {
    pub id: String,
    pub name: String,
    /// Display price, e.g. `R$ 8,00` or `Consultar Valor`
    pub price_label: String,
    pub image: String,
    /// Price is quoted on request; the label is left out of the inquiry text
    #[serde(default)]
    pub price_on_request: bool,
}

/// Catalog item as listed on the storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemCard {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub price_label: String,
}

impl From<&CatalogItem> for CatalogItemCard {
    fn from(item: &CatalogItem) -> Self {
        Self {
            price_label: item.price_label(),
            item: item.clone(),
        }
    }
}

/// Full storefront listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontView {
    pub title: String,
    pub ready_made: Vec<CatalogItemCard>,
    pub custom: Vec<CatalogItemCard>,
    pub sizes: Vec<SizeOption>,
    pub default_size: String,
    pub add_ons: Vec<AddOnOption>,
    pub regional: Vec<RegionalProduct>,
}
