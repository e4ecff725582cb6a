//! Shared types for drafts, cart lines and checkout

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Cart Line Types
// ============================================================================

/// Add-on captured on a committed line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineAddOn {
    pub name: String,
    /// Always >= 1
    pub quantity: u32,
    /// Unit price at commit time (0 when the name was not in the add-on table)
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// Committed, priced snapshot of one customized item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// `<item id>-<creation millis>`, unique within a session
    pub id: String,
    pub name: String,
    pub size_label: String,
    /// Size price at commit time
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_base_price: Decimal,
    /// Insertion order of the draft
    pub add_ons: Vec<CartLineAddOn>,
    /// Always >= 1
    pub quantity: u32,
}

// ============================================================================
// Views
// ============================================================================

/// Add-on quantity chosen in a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnQuantity {
    pub name: String,
    pub quantity: u32,
}

/// Open customization dialog with its live price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftView {
    pub item_id: String,
    pub item_name: String,
    pub size_key: String,
    /// Complements included with the selected size (None for an unknown size)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement_allowance: Option<u32>,
    pub add_ons: Vec<AddOnQuantity>,
    pub quantity: u32,
    /// `(size + add-ons) * quantity`
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Cart line with its computed subtotal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Cart contents and running totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_items: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// Checkout is only offered for a non-empty cart
    pub can_checkout: bool,
}

/// Whole browsing session as seen by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<DraftView>,
    pub cart: CartView,
}

// ============================================================================
// Checkout
// ============================================================================

/// One line of the order summary, money already formatted to 2 decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryLine {
    pub name: String,
    pub size_label: String,
    pub quantity: u32,
    /// `+ {qty}x {name}` entries
    pub add_ons: Vec<String>,
    pub subtotal: String,
}

/// Formatted order ready for hand-off
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutView {
    pub lines: Vec<OrderSummaryLine>,
    /// Grand total, 2 decimals
    pub total: String,
    /// Plain message text
    pub message: String,
    /// Messaging link carrying the percent-encoded message
    pub url: String,
}

/// Messaging link for a regional product inquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryLink {
    pub product_id: String,
    pub message: String,
    pub url: String,
}
