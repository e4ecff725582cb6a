//! Money calculation utilities using rust_decimal for precision
//!
//! This module provides precise decimal arithmetic for cart lines.
//! Amounts stay unrounded `Decimal` through every sum; rounding to two
//! places happens only when a value is formatted for display.

use rust_decimal::prelude::*;
use shared::order::CartLine;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly two decimals, e.g. `44.00`
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Per-unit price of a committed line
///
/// Formula: unit_base_price + Σ(add_on.unit_price × add_on.quantity)
pub fn calculate_line_unit_price(line: &CartLine) -> Decimal {
    let add_ons: Decimal = line
        .add_ons
        .iter()
        .map(|a| a.unit_price * Decimal::from(a.quantity))
        .sum();

    line.unit_base_price + add_ons
}

/// Line subtotal
///
/// Formula: unit_price × quantity
pub fn calculate_line_total(line: &CartLine) -> Decimal {
    calculate_line_unit_price(line) * Decimal::from(line.quantity)
}

/// Sum of line subtotals
pub fn sum_line_totals<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Decimal {
    lines.into_iter().map(calculate_line_total).sum()
}
