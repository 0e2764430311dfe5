//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                         Error Types                            │
//! │                                                                │
//! │  tally-core errors (this file)                                 │
//! │  ├── CoreError        - Catalog/stock domain errors            │
//! │  └── ValidationError  - Input validation failures              │
//! │                                                                │
//! │  The register app never surfaces these as failures: every      │
//! │  recoverable condition becomes a re-prompt at the console.     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, stock, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout domain errors.
///
/// These represent business rule violations raised by catalog and
/// session operations. The selection loop catches them and turns each
/// into a re-prompt reply.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product name does not match any catalog entry.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to commit the requested quantity.
    ///
    /// ## When This Occurs
    /// - Requested quantity exceeds `Product::stock`
    /// - Stock was drained by earlier lines in the same session
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Requested quantity is zero or negative.
    #[error("Quantity must be positive, got {requested}")]
    QuantityNotPositive { requested: i64 },

    /// Catalog seed data could not be parsed or violates invariants.
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when input doesn't meet requirements. Used for early
/// validation before catalog or session logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric quantity input).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product name in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Keyboard".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Keyboard: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quantity has invalid format: must be a whole number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
