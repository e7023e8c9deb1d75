//! # Error Types
//!
//! Domain-specific error types for toko-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                            Error Types                               │
//! │                                                                      │
//! │  toko-core errors (this file)                                        │
//! │  └── ValidationError  - Input validation failures                    │
//! │                                                                      │
//! │  toko-db errors (separate crate)                                     │
//! │  └── DbError          - Storage failures + checkout outcomes         │
//! │      (wraps ValidationError as DbError::InvalidInput)                │
//! │                                                                      │
//! │  Flow: ValidationError → DbError → service layer                     │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, bounds, ...)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input does not meet requirements. Used for early
/// validation before any storage work runs; checkout outcomes that need
/// storage access (unknown product, insufficient stock) are raised by the
/// storage layer instead.
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

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A checkout was submitted with no items.
    #[error("checkout must contain at least one item")]
    EmptyCheckout,

    /// A checkout exceeds the maximum number of line items.
    #[error("checkout cannot have more than {max} items")]
    TooManyItems { max: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::EmptyCheckout;
        assert_eq!(err.to_string(), "checkout must contain at least one item");

        let err = ValidationError::TooManyItems { max: 100 };
        assert_eq!(err.to_string(), "checkout cannot have more than 100 items");
    }
}
