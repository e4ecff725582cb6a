//! Selection draft
//!
//! One in-progress customization of a catalog item. A draft is opened with
//! the catalog defaults, edited through clamped deltas, and finally either
//! committed into a priced [`CartLine`] or discarded.

use rust_decimal::Decimal;
use shared::models::CatalogItem;
use shared::order::{AddOnQuantity, CartLine, DraftView};

use crate::catalog::Catalog;
use crate::pricing;

/// Distinct add-on entries one draft may hold
pub const MAX_ADD_ON_ENTRIES: usize = 32;
/// Longest accepted add-on name, in characters
pub const MAX_ADD_ON_NAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionDraft {
    item_id: String,
    item_name: String,
    size_key: String,
    /// Insertion ordered, every quantity >= 1
    add_ons: Vec<AddOnQuantity>,
    /// Always >= 1
    quantity: u32,
}

impl SelectionDraft {
    /// Open a draft for `item` with the default size, no add-ons and quantity 1
    pub fn open(item: &CatalogItem, default_size: &str) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            size_key: default_size.to_string(),
            add_ons: Vec::new(),
            quantity: 1,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn size_key(&self) -> &str {
        &self.size_key
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn add_ons(&self) -> &[AddOnQuantity] {
        &self.add_ons
    }

    /// Quantity of one add-on (absent means 0)
    pub fn add_on_quantity(&self, name: &str) -> u32 {
        self.add_ons
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.quantity)
            .unwrap_or(0)
    }

    pub fn select_size(&mut self, size_key: impl Into<String>) {
        self.size_key = size_key.into();
    }

    pub fn increment_add_on(&mut self, name: &str) {
        match self.add_ons.iter_mut().find(|a| a.name == name) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.add_ons.push(AddOnQuantity {
                name: name.to_string(),
                quantity: 1,
            }),
        }
    }

    /// Clamped at 0; an entry reaching 0 is removed
    pub fn decrement_add_on(&mut self, name: &str) {
        if let Some(pos) = self.add_ons.iter().position(|a| a.name == name) {
            if self.add_ons[pos].quantity <= 1 {
                self.add_ons.remove(pos);
            } else {
                self.add_ons[pos].quantity -= 1;
            }
        }
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Clamped at 1
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    fn selection(&self) -> impl Iterator<Item = (&str, u32)> {
        self.add_ons.iter().map(|a| (a.name.as_str(), a.quantity))
    }

    /// Live price of the draft
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        pricing::calculate_price(catalog, &self.size_key, self.selection(), self.quantity)
    }

    /// Snapshot the draft into a priced cart line
    ///
    /// Prices are captured now; later catalog lookups never change the line.
    pub fn commit(self, catalog: &Catalog, line_id: String) -> CartLine {
        let breakdown = pricing::price_breakdown(catalog, &self.size_key, self.selection());
        let size_label = catalog
            .size(&self.size_key)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| self.size_key.clone());

        CartLine {
            id: line_id,
            name: self.item_name,
            size_label,
            unit_base_price: breakdown.size_price,
            add_ons: breakdown.add_ons,
            quantity: self.quantity,
        }
    }

    pub fn view(&self, catalog: &Catalog) -> DraftView {
        DraftView {
            item_id: self.item_id.clone(),
            item_name: self.item_name.clone(),
            size_key: self.size_key.clone(),
            complement_allowance: catalog
                .size(&self.size_key)
                .map(|s| s.complement_allowance),
            add_ons: self.add_ons.clone(),
            quantity: self.quantity,
            total: self.total(catalog),
        }
    }
}
