//! Browsing sessions
//!
//! - [`Session`] - draft slot + cart, driven by [`shared::SessionCommand`]
//! - [`SessionManager`] - concurrent in-memory store with idle eviction

mod manager;
mod state;

pub use manager::SessionManager;
pub use state::Session;
