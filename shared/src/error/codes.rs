//! Unified error codes for Abocado
//!
//! This module defines all error codes used across the server, the client and
//! any frontend consuming the API. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Dish errors
//! - 7xxx: Table errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been completed
    OrderAlreadyCompleted = 4003,
    /// Order has already been cancelled
    OrderAlreadyCancelled = 4004,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Order is empty
    OrderEmpty = 4007,
    /// Order is no longer active
    OrderNotActive = 4008,
    /// Order still has undelivered items
    OrderHasOpenItems = 4009,
    /// Requested item status transition is not allowed
    ItemStatusTransitionInvalid = 4010,

    // ==================== 6xxx: Dish ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish is currently not available
    DishUnavailable = 6003,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is not available (occupied or reserved)
    TableNotAvailable = 7002,
    /// Table is already empty
    TableAlreadyEmpty = 7003,
    /// Table has an active order
    TableHasOrders = 7004,
    /// Table number already exists
    TableNumberExists = 7005,

    // ==================== 8xxx: Staff ====================
    /// Staff account not found
    StaffNotFound = 8001,
    /// Staff username already exists
    StaffUsernameExists = 8002,
    /// Cannot delete own account
    StaffCannotDeleteSelf = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyCompleted => "Order has already been completed",
            ErrorCode::OrderAlreadyCancelled => "Order has already been cancelled",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::OrderNotActive => "Order is not active",
            ErrorCode::OrderHasOpenItems => "Order still has undelivered items",
            ErrorCode::ItemStatusTransitionInvalid => "Item status transition is not allowed",

            // Dish
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishUnavailable => "Dish is not available",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableNotAvailable => "Table is not available",
            ErrorCode::TableAlreadyEmpty => "Table is already empty",
            ErrorCode::TableHasOrders => "Table has an active order",
            ErrorCode::TableNumberExists => "Table number already exists",

            // Staff
            ErrorCode::StaffNotFound => "Staff account not found",
            ErrorCode::StaffUsernameExists => "Username already exists",
            ErrorCode::StaffCannotDeleteSelf => "Cannot delete own account",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
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
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4003 => Ok(ErrorCode::OrderAlreadyCompleted),
            4004 => Ok(ErrorCode::OrderAlreadyCancelled),
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::OrderNotActive),
            4009 => Ok(ErrorCode::OrderHasOpenItems),
            4010 => Ok(ErrorCode::ItemStatusTransitionInvalid),

            // Dish
            6001 => Ok(ErrorCode::DishNotFound),
            6003 => Ok(ErrorCode::DishUnavailable),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableNotAvailable),
            7003 => Ok(ErrorCode::TableAlreadyEmpty),
            7004 => Ok(ErrorCode::TableHasOrders),
            7005 => Ok(ErrorCode::TableNumberExists),

            // Staff
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::StaffUsernameExists),
            8003 => Ok(ErrorCode::StaffCannotDeleteSelf),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::TokenExpired,
            ErrorCode::OrderEmpty,
            ErrorCode::ItemStatusTransitionInvalid,
            ErrorCode::DishUnavailable,
            ErrorCode::TableAlreadyEmpty,
            ErrorCode::StaffCannotDeleteSelf,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        // retired general and dish codes no longer decode
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(6002), Err(InvalidErrorCode(6002)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::TableNotAvailable).unwrap();
        assert_eq!(json, "7002");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::OrderNotFound);
    }
}
