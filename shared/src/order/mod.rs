//! Order Module
//!
//! This module provides the wire types of the ordering flow:
//! - Commands: Requests from clients to edit their draft or cart
//! - Cart lines: Immutable priced snapshots committed from a draft
//! - Views: Session, cart and checkout representations returned to clients

pub mod command;
pub mod types;

// Re-exports
pub use command::SessionCommand;
pub use types::*;
