//! Cart aggregator
//!
//! Ordered sequence of committed lines. Lines are immutable once added and
//! leave the cart only by id.

use rust_decimal::Decimal;
use shared::order::{CartLine, CartLineView, CartView};

use crate::order_money::{calculate_line_total, sum_line_totals};

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Remove the first line with `line_id`; returns whether one was removed
    pub fn remove_line(&mut self, line_id: &str) -> bool {
        match self.lines.iter().position(|l| l.id == line_id) {
            Some(pos) => {
                self.lines.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Σ line quantity
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ line subtotal, unrounded
    pub fn total_price(&self) -> Decimal {
        sum_line_totals(&self.lines)
    }

    pub fn view(&self) -> CartView {
        CartView {
            lines: self
                .lines
                .iter()
                .map(|line| CartLineView {
                    subtotal: calculate_line_total(line),
                    line: line.clone(),
                })
                .collect(),
            total_items: self.total_item_count(),
            total_price: self.total_price(),
            can_checkout: !self.is_empty(),
        }
    }
}
