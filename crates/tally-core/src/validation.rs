//! # Validation Module
//!
//! Input validation utilities for Tally POS.
//!
//! Two callers rely on these checks:
//! - catalog construction validates seed data before a store opens
//! - the selection loop parses and range-checks shopper input
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{parse_quantity, validate_product_name};
//!
//! validate_product_name("Keyboard").unwrap();
//! assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
//! assert!(parse_quantity("a dozen").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero means sold out
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Parses shopper quantity input into an integer.
///
/// Non-numeric input is a recoverable condition: the selection loop
/// turns this error into a re-prompt without any state change.
/// Range checking against stock happens later, in `Catalog::commit`.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
