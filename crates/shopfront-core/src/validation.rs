//! # Field Rules
//!
//! Every text or numeric field a command carries is checked here before a
//! store is touched. Shape problems (wrong JSON types, unknown kinds) never
//! reach this module; serde rejects them while decoding the `Command`.
//!
//! | Field        | Rule                           | Error            |
//! |--------------|--------------------------------|------------------|
//! | `userName`   | trimmed, 1..=64 chars          | Required/TooLong |
//! | `name`       | trimmed, 1..=200 chars         | Required/TooLong |
//! | `category`   | trimmed, 1..=100 chars         | Required/TooLong |
//! | `priceCents` | `0..=MAX_PRICE_CENTS`          | OutOfRange       |
//! | `quantity`   | `1..=MAX_ITEM_QUANTITY`        | MustBePositive/OutOfRange |
//!
//! ```rust
//! use shopfront_core::validation::{validate_price_cents, validate_quantity};
//!
//! assert!(validate_price_cents(2500).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{
    MAX_CATEGORY_LEN, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS, MAX_PRODUCT_NAME_LEN, MAX_USER_NAME_LEN,
};

pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks a trimmed string is non-empty and at most `max` characters.
fn validate_text<'a>(field: &str, value: &'a str, max: usize) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value)
}

/// Validates a login name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 64 characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_user_name;
///
/// assert_eq!(validate_user_name("  alice ").unwrap(), "alice");
/// assert!(validate_user_name("   ").is_err());
/// ```
pub fn validate_user_name(name: &str) -> ValidationResult<&str> {
    validate_text("userName", name, MAX_USER_NAME_LEN)
}

/// Trimmed product name, 1 to 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<&str> {
    validate_text("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Trimmed category label, 1 to 100 characters.
pub fn validate_category(category: &str) -> ValidationResult<&str> {
    validate_text("category", category, MAX_CATEGORY_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// A catalog price in `0..=MAX_PRICE_CENTS`. Zero is a legal price.
///
/// ```rust
/// use shopfront_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(14_900).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// A quantity set explicitly on a cart line: `1..=MAX_ITEM_QUANTITY`.
///
/// Zero is rejected rather than treated as a removal; `removeFromCart`
/// drops a line.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_name() {
        assert_eq!(validate_user_name("alice").unwrap(), "alice");
        assert_eq!(validate_user_name("  bob  ").unwrap(), "bob");

        assert!(matches!(
            validate_user_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_user_name(" \t ").is_err());
        assert!(matches!(
            validate_user_name(&"a".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_product_fields() {
        assert_eq!(validate_product_name(" Headphones ").unwrap(), "Headphones");
        assert!(validate_product_name("\n").is_err());
        assert!(matches!(
            validate_product_name(&"x".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
        // Length counts characters, not bytes
        assert!(validate_product_name(&"é".repeat(200)).is_ok());

        assert_eq!(validate_category(" Books ").unwrap(), "Books");
        assert!(matches!(
            validate_category(""),
            Err(ValidationError::Required { ref field }) if field == "category"
        ));
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-7).is_err());
        assert!(matches!(
            validate_quantity(MAX_ITEM_QUANTITY + 1),
            Err(ValidationError::OutOfRange { min: 1, max: 999, .. })
        ));
    }

    #[test]
    fn test_price_floor() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(99_900).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(matches!(
            validate_price_cents(-1),
            Err(ValidationError::OutOfRange { min: 0, .. })
        ));
        assert!(matches!(
            validate_price_cents(MAX_PRICE_CENTS + 1),
            Err(ValidationError::OutOfRange { max: MAX_PRICE_CENTS, .. })
        ));
        assert!(validate_price_cents(i64::MAX / 2 + 1).is_err());
    }
}
