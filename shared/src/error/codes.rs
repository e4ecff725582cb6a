//! Unified error codes for the storefront
//!
//! This module defines all error codes returned by the storefront API.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Session errors
//! - 4xxx: Order errors (draft, cart, checkout)
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Session ====================
    /// Browsing session not found
    SessionNotFound = 1001,
    /// Browsing session has expired
    SessionExpired = 1002,

    // ==================== 4xxx: Order ====================
    /// Cart is empty
    OrderEmpty = 4001,
    /// No item is open for customization
    DraftNotOpen = 4002,

    // ==================== 6xxx: Product ====================
    /// Catalog item not found
    ProductNotFound = 6001,
    /// Regional product not found
    RegionalProductNotFound = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",

            // Session
            ErrorCode::SessionNotFound => "Session not found",
            ErrorCode::SessionExpired => "Session has expired",

            // Order
            ErrorCode::OrderEmpty => "Cart is empty",
            ErrorCode::DraftNotOpen => "No item is open for customization",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::RegionalProductNotFound => "Regional product not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),

            // Session
            1001 => Ok(ErrorCode::SessionNotFound),
            1002 => Ok(ErrorCode::SessionExpired),

            // Order
            4001 => Ok(ErrorCode::OrderEmpty),
            4002 => Ok(ErrorCode::DraftNotOpen),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::RegionalProductNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
