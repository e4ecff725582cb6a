//! Checkout
//!
//! - [`formatter`] - order summary and message text
//! - [`link`] - messaging hand-off URL

pub mod formatter;
pub mod link;

pub use formatter::{format_order, inquiry_link, inquiry_message};
pub use link::MessagingLink;
