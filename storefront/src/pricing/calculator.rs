//! Price Calculator
//!
//! Prices a selection (size + add-on quantities + item quantity) against
//! the catalog tables. Unknown keys degrade to a zero contribution and are
//! reported through a warning event instead of an error.

use rust_decimal::Decimal;
use shared::order::CartLineAddOn;

use crate::catalog::Catalog;

/// Resolved prices of a selection, captured when a draft is committed
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Size price (0 for an unknown size)
    pub size_price: Decimal,
    /// Add-ons in selection order with their resolved unit prices
    pub add_ons: Vec<CartLineAddOn>,
}

impl PriceBreakdown {
    /// size_price + Σ(unit_price × quantity)
    pub fn unit_price(&self) -> Decimal {
        self.size_price
            + self
                .add_ons
                .iter()
                .map(|a| a.unit_price * Decimal::from(a.quantity))
                .sum::<Decimal>()
    }
}

/// Size price, or zero when the key is not in the size table
pub fn size_price(catalog: &Catalog, size_key: &str) -> Decimal {
    match catalog.size(size_key) {
        Some(size) => size.price,
        None => {
            tracing::warn!(size_key = %size_key, "Unknown size key, pricing as zero");
            Decimal::ZERO
        }
    }
}

/// Add-on unit price, or zero when the name is not in the add-on table
pub fn add_on_price(catalog: &Catalog, name: &str) -> Decimal {
    match catalog.add_on(name) {
        Some(add_on) => add_on.price,
        None => {
            tracing::warn!(add_on = %name, "Unknown add-on, pricing as zero");
            Decimal::ZERO
        }
    }
}

/// Resolve every price of a selection
pub fn price_breakdown<'a>(
    catalog: &Catalog,
    size_key: &str,
    add_ons: impl IntoIterator<Item = (&'a str, u32)>,
) -> PriceBreakdown {
    PriceBreakdown {
        size_price: size_price(catalog, size_key),
        add_ons: add_ons
            .into_iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|(name, quantity)| CartLineAddOn {
                name: name.to_string(),
                quantity,
                unit_price: add_on_price(catalog, name),
            })
            .collect(),
    }
}

/// Total price of a selection
///
/// Formula: (size_price + Σ add_on_price(name) × qty) × quantity
pub fn calculate_price<'a>(
    catalog: &Catalog,
    size_key: &str,
    add_ons: impl IntoIterator<Item = (&'a str, u32)>,
    quantity: u32,
) -> Decimal {
    price_breakdown(catalog, size_key, add_ons).unit_price() * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn no_add_ons() -> Vec<(&'static str, u32)> {
        Vec::new()
    }

    #[test]
    fn test_size_and_add_ons_scenario() {
        // 400ml (15) + Granola x2 (4) + Leite Ninho x1 (3) = 22, x2 = 44
        let total = calculate_price(
            &catalog(),
            "400ml",
            [("Granola", 2), ("Leite Ninho", 1)],
            2,
        );
        assert_eq!(total, Decimal::from(44));
    }

    #[test]
    fn test_size_only() {
        for (key, price) in [("300ml", 12), ("400ml", 15), ("500ml", 18)] {
            assert_eq!(
                calculate_price(&catalog(), key, no_add_ons(), 1),
                Decimal::from(price)
            );
        }
    }

    #[test]
    fn test_unknown_add_on_contributes_zero() {
        let with_unknown = calculate_price(&catalog(), "300ml", [("Unicorn Dust", 3)], 1);
        assert_eq!(with_unknown, Decimal::from(12));

        let mixed = calculate_price(
            &catalog(),
            "300ml",
            [("Unicorn Dust", 3), ("Morango", 1)],
            2,
        );
        assert_eq!(mixed, Decimal::from(32));
    }

    #[test]
    fn test_unknown_size_prices_as_zero() {
        assert_eq!(calculate_price(&catalog(), "1l", no_add_ons(), 3), Decimal::ZERO);
        assert_eq!(
            calculate_price(&catalog(), "1l", [("Banana", 2)], 1),
            Decimal::from(4)
        );
    }

    #[test]
    fn test_fractional_add_on_price() {
        // (18 + 2.5 * 3) * 1 = 25.5
        assert_eq!(
            calculate_price(&catalog(), "500ml", [("Paçoca", 3)], 1),
            Decimal::new(255, 1)
        );
    }

    #[test]
    fn test_monotonic_in_add_on_quantity() {
        let catalog = catalog();
        for name in ["Granola", "Paçoca", "Morango", "Unicorn Dust"] {
            let mut previous = Decimal::ZERO;
            for qty in 0..6 {
                let total = calculate_price(&catalog, "400ml", [("Oreo", 1), (name, qty)], 2);
                assert!(total >= previous, "{name} x{qty} decreased the price");
                previous = total;
            }
        }
    }

    #[test]
    fn test_matches_formula() {
        let catalog = catalog();
        let selection = [("Bis", 1), ("Oreo", 2), ("Cobertura Caramelo", 4)];
        for size in catalog.sizes() {
            for qty in 1..4 {
                let expected = (size.price
                    + selection
                        .iter()
                        .map(|(n, q)| catalog.add_on(n).unwrap().price * Decimal::from(*q))
                        .sum::<Decimal>())
                    * Decimal::from(qty);
                assert_eq!(
                    calculate_price(&catalog, &size.key, selection, qty),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_breakdown_captures_unit_prices() {
        let breakdown = price_breakdown(&catalog(), "500ml", [("Morango", 1), ("Ghost", 2)]);
        assert_eq!(breakdown.size_price, Decimal::from(18));
        assert_eq!(breakdown.add_ons.len(), 2);
        assert_eq!(breakdown.add_ons[0].unit_price, Decimal::from(4));
        assert_eq!(breakdown.add_ons[1].unit_price, Decimal::ZERO);
        assert_eq!(breakdown.unit_price(), Decimal::from(22));
    }

    #[test]
    fn test_breakdown_skips_zero_quantities() {
        let breakdown = price_breakdown(&catalog(), "400ml", [("Granola", 0)]);
        assert!(breakdown.add_ons.is_empty());
    }
}
