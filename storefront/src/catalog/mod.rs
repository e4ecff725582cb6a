//! Storefront catalog
//!
//! Read-only tables loaded once at startup: catalog items, cup sizes,
//! add-ons and regional products. All lookups are by key and return
//! `Option`; pricing decides what a missing key means.

pub mod data;
mod validation;

use shared::error::AppResult;
use shared::models::{
    AddOnOption, CatalogItem, CatalogItemCard, ItemKind, RegionalProduct, SizeOption,
    StorefrontView,
};

pub use data::{DEFAULT_SIZE_KEY, STORE_TITLE};
pub use validation::validate_catalog;

/// Immutable catalog shared by all sessions
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    sizes: Vec<SizeOption>,
    add_ons: Vec<AddOnOption>,
    regional: Vec<RegionalProduct>,
    default_size: String,
}

impl Catalog {
    pub fn new(
        items: Vec<CatalogItem>,
        sizes: Vec<SizeOption>,
        add_ons: Vec<AddOnOption>,
        regional: Vec<RegionalProduct>,
        default_size: impl Into<String>,
    ) -> Self {
        Self {
            items,
            sizes,
            add_ons,
            regional,
            default_size: default_size.into(),
        }
    }

    /// Built-in tables, unvalidated
    pub fn builtin() -> Self {
        Self::new(
            data::items(),
            data::sizes(),
            data::add_ons(),
            data::regional(),
            DEFAULT_SIZE_KEY,
        )
    }

    /// Built-in tables after the load-time consistency checks
    pub fn load() -> AppResult<Self> {
        let catalog = Self::builtin();
        validate_catalog(&catalog)?;
        tracing::info!(
            items = catalog.items.len(),
            sizes = catalog.sizes.len(),
            add_ons = catalog.add_ons.len(),
            regional = catalog.regional.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |i| i.kind == kind)
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn sizes(&self) -> &[SizeOption] {
        &self.sizes
    }

    pub fn size(&self, key: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.key == key)
    }

    pub fn default_size(&self) -> &str {
        &self.default_size
    }

    pub fn add_ons(&self) -> &[AddOnOption] {
        &self.add_ons
    }

    pub fn add_on(&self, name: &str) -> Option<&AddOnOption> {
        self.add_ons.iter().find(|a| a.name == name)
    }

    pub fn regional(&self) -> &[RegionalProduct] {
        &self.regional
    }

    pub fn regional_product(&self, id: &str) -> Option<&RegionalProduct> {
        self.regional.iter().find(|p| p.id == id)
    }

    /// Everything the storefront page lists, grouped by section
    pub fn storefront_view(&self) -> StorefrontView {
        StorefrontView {
            title: STORE_TITLE.to_string(),
            ready_made: self
                .items_of_kind(ItemKind::ReadyMade)
                .map(CatalogItemCard::from)
                .collect(),
            custom: self
                .items_of_kind(ItemKind::Custom)
                .map(CatalogItemCard::from)
                .collect(),
            sizes: self.sizes.clone(),
            default_size: self.default_size.clone(),
            add_ons: self.add_ons.clone(),
            regional: self.regional.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_builtin_tables() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.items().len(), 6);
        assert_eq!(catalog.sizes().len(), 3);
        assert_eq!(catalog.add_ons().len(), 14);
        assert_eq!(catalog.regional().len(), 4);
        assert_eq!(catalog.items_of_kind(ItemKind::ReadyMade).count(), 5);
        assert_eq!(catalog.items_of_kind(ItemKind::Custom).count(), 1);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.size("400ml").unwrap().price, Decimal::from(15));
        assert_eq!(catalog.size("300ml").unwrap().complement_allowance, 4);
        assert_eq!(catalog.add_on("Paçoca").unwrap().price, Decimal::new(25, 1));
        assert_eq!(catalog.item("6").unwrap().name, "Monte o Seu");
        assert!(catalog.regional_product("p2").unwrap().price_on_request);
        assert!(catalog.size("1l").is_none());
        assert!(catalog.add_on("Unicorn Dust").is_none());
        assert!(catalog.item("99").is_none());
    }

    #[test]
    fn test_storefront_view_sections() {
        let view = Catalog::builtin().storefront_view();
        assert_eq!(view.title, "MINA DE AÇAÍ");
        assert_eq!(view.ready_made.len(), 5);
        assert_eq!(view.custom.len(), 1);
        assert_eq!(view.custom[0].item.id, "6");
        assert_eq!(view.default_size, "400ml");
        assert_eq!(view.ready_made[0].price_label, "A partir de R$ 12");
    }

    #[test]
    fn test_load_validates() {
        assert!(Catalog::load().is_ok());
    }
}
