//! Data models
//!
//! Shared between the storefront server and its clients (via API).

pub mod catalog;

// Re-exports
pub use catalog::*;
