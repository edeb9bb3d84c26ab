//! Input validation helpers
//!
//! Text length limits and the field checks shared by CRUD handlers.

use rust_decimal::Decimal;
use shared::order::MAX_PRICE;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Dish names, usernames
pub const MAX_NAME_LEN: usize = 200;

/// Dish descriptions, item notes
pub const MAX_NOTE_LEN: usize = 500;

/// Image URLs / paths
pub const MAX_URL_LEN: usize = 2048;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Length check only; empty values pass.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Prices are non-negative, bounded, with at most two decimals
pub fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::validation("price must not be negative").with_detail("field", "price"));
    }
    if price > MAX_PRICE {
        return Err(
            AppError::validation(format!("price exceeds maximum allowed ({MAX_PRICE})"))
                .with_detail("field", "price"),
        );
    }
    if price.normalize().scale() > 2 {
        return Err(
            AppError::validation("price must have at most 2 decimal places")
                .with_detail("field", "price"),
        );
    }
    Ok(())
}

/// Validate a positive integer field (capacity, prep time, table number)
pub fn validate_positive(value: u32, field: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(
            AppError::validation(format!("{field} must be at least 1")).with_detail("field", field),
        );
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ))
        .with_detail("field", "password"));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN})"
        ))
        .with_detail("field", "password"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Burger", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_price() {
        assert!(validate_price(Decimal::new(899, 2)).is_ok());
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(-1, 2)).is_err());
        assert!(validate_price(Decimal::new(8999, 3)).is_err());
        // trailing zeros do not count
        assert!(validate_price(Decimal::new(8990, 3)).is_ok());
    }

    #[test]
    fn test_price_upper_bound() {
        assert!(validate_price(MAX_PRICE).is_ok());
        let err = validate_price(MAX_PRICE + Decimal::new(1, 2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(validate_price(Decimal::from_i128_with_scale(10_i128.pow(20), 0)).is_err());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive(0, "capacity").is_err());
        assert!(validate_positive(1, "capacity").is_ok());
    }
}
