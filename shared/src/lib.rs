//! Shared types for the Mina de Açaí storefront
//!
//! Common types used by the server and its clients including error types,
//! response structures, catalog models and order wire types.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use order::SessionCommand;
