//! Order formatter
//!
//! Turns cart lines into a per-line summary, a grand total and the
//! greeting-wrapped message text handed to the messaging link.

use shared::models::RegionalProduct;
use shared::order::{CartLine, CheckoutView, InquiryLink, OrderSummaryLine};

use super::MessagingLink;
use crate::order_money::{calculate_line_total, format_money, sum_line_totals};

pub const ORDER_GREETING: &str = "Olá! Gostaria de fazer o seguinte pedido:";
pub const INQUIRY_GREETING: &str = "Olá! Gostaria de saber mais sobre:";

pub fn summarize_line(line: &CartLine) -> OrderSummaryLine {
    OrderSummaryLine {
        name: line.name.clone(),
        size_label: line.size_label.clone(),
        quantity: line.quantity,
        add_ons: line
            .add_ons
            .iter()
            .map(|a| format!("+ {}x {}", a.quantity, a.name))
            .collect(),
        subtotal: format_money(calculate_line_total(line)),
    }
}

fn render_line(line: &OrderSummaryLine) -> String {
    let mut text = format!("- {} ({}) x{}", line.name, line.size_label, line.quantity);
    for add_on in &line.add_ons {
        text.push_str("\n  ");
        text.push_str(add_on);
    }
    text.push_str(&format!("\n  Subtotal: R$ {}", line.subtotal));
    text
}

/// Full order message
///
/// Greeting, a blank line, the line blocks separated by blank lines,
/// another blank line and the bold total.
pub fn render_message(lines: &[OrderSummaryLine], total: &str) -> String {
    let body = lines
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{ORDER_GREETING}\n\n{body}\n\n*Total: R$ {total}*")
}

/// Format an order; an empty cart yields no lines and total `0.00`
pub fn format_order(lines: &[CartLine], link: &MessagingLink) -> CheckoutView {
    let summary: Vec<OrderSummaryLine> = lines.iter().map(summarize_line).collect();
    let total = format_money(sum_line_totals(lines));
    let message = render_message(&summary, &total);
    let url = link.url_for(&message);

    CheckoutView {
        lines: summary,
        total,
        message,
        url,
    }
}

pub fn inquiry_message(product: &RegionalProduct) -> String {
    if product.price_on_request {
        format!("{INQUIRY_GREETING} {}", product.name)
    } else {
        format!("{INQUIRY_GREETING} {} - {}", product.name, product.price_label)
    }
}

pub fn inquiry_link(product: &RegionalProduct, link: &MessagingLink) -> InquiryLink {
    let message = inquiry_message(product);
    InquiryLink {
        product_id: product.id.clone(),
        url: link.url_for(&message),
        message,
    }
}
