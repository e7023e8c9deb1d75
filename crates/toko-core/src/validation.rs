//! # Validation Module
//!
//! Input validation for the Toko backend.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        Validation Layers                             │
//! │                                                                      │
//! │  Layer 1: Service layer (HTTP)                                       │
//! │  └── Type validation (request body deserialization)                  │
//! │           │                                                           │
//! │           ▼                                                           │
//! │  Layer 2: THIS MODULE                                                 │
//! │  └── Business rule validation, before any storage work               │
//! │           │                                                           │
//! │           ▼                                                           │
//! │  Layer 3: Database (SQLite)                                           │
//! │  ├── NOT NULL / CHECK constraints                                     │
//! │  └── Foreign key constraints                                          │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toko_core::validation::{validate_checkout, validate_quantity};
//! use toko_core::types::CheckoutItem;
//!
//! validate_quantity(5).unwrap();
//! validate_checkout(&[CheckoutItem { product_id: 1, quantity: 2 }]).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::CheckoutItem;
use crate::{MAX_CHECKOUT_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
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

/// Validates a full checkout request.
///
/// ## Rules
/// - At least one item
/// - At most MAX_CHECKOUT_ITEMS items
/// - Every quantity passes [`validate_quantity`]
///
/// Product existence and stock levels are NOT checked here; those require
/// storage access and are verified inside the checkout's transactional scope.
pub fn validate_checkout(items: &[CheckoutItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCheckout);
    }

    if items.len() > MAX_CHECKOUT_ITEMS {
        return Err(ValidationError::TooManyItems {
            max: MAX_CHECKOUT_ITEMS,
        });
    }

    for item in items {
        validate_quantity(item.quantity)?;
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in minor currency units.
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
/// - Must be non-negative (>= 0); negative inventory is never accepted
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

// =============================================================================
// Unit Tests
// =============================================================================
