//! # Domain Types
//!
//! Core domain types for the Toko backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                           Domain Types                               │
//! │                                                                      │
//! │  ┌────────────────┐   ┌──────────────────┐   ┌───────────────────┐  │
//! │  │    Product     │   │   Transaction    │   │ TransactionDetail │  │
//! │  │  ────────────  │   │  ──────────────  │   │  ───────────────  │  │
//! │  │  id (i64)      │   │  id (i64)        │   │  transaction_id   │  │
//! │  │  name          │   │  total_cents     │   │  product_id       │  │
//! │  │  price_cents   │   │  created_at      │   │  product_name (*) │  │
//! │  │  stock         │   │  details[]       │   │  quantity         │  │
//! │  └────────────────┘   └──────────────────┘   │  subtotal_cents   │  │
//! │                                              └───────────────────┘  │
//! │  (*) snapshot: frozen at time of sale                               │
//! │                                                                      │
//! │  ┌────────────────┐   ┌──────────────────┐                          │
//! │  │  CheckoutItem  │   │   DailyReport    │                          │
//! │  │  (input, not   │   │   (derived, not  │                          │
//! │  │   persisted)   │   │    persisted)    │                          │
//! │  └────────────────┘   └──────────────────┘                          │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every persisted entity uses a database-assigned integer identity
//! (`INTEGER PRIMARY KEY`). Insert payloads (`NewProduct`, `CheckoutItem`)
//! therefore carry no id of their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Mutated only by the catalog repository and by stock decrements during
/// checkout. Stock never goes negative after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Database-assigned identity.
    pub id: i64,

    /// Display name shown to the cashier and snapshotted onto sale details.
    pub name: String,

    /// Price in minor currency units (cents). Never negative.
    pub price_cents: i64,

    /// Current stock level. Never negative.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

/// Payload for inserting a new product. Identity is database-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

// =============================================================================
// Checkout Input
// =============================================================================

/// One requested line of a checkout: which product, how many units.
///
/// Ephemeral input decoded by the service layer; validated by
/// [`crate::validation::validate_checkout`] before any storage work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: i64,
    pub quantity: i64,
}

// =============================================================================
// Transaction Ledger
// =============================================================================

/// A line item of a completed transaction.
///
/// ## Snapshot Pattern
/// `product_name` and `subtotal_cents` are frozen at time of sale. The
/// product may later change name or price without altering this row.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    /// Owning transaction.
    pub transaction_id: i64,

    /// Product reference (the live row, not the snapshot).
    pub product_id: i64,

    /// Product name at time of sale (frozen).
    pub product_name: String,

    /// Units sold.
    pub quantity: i64,

    /// quantity × unit price at sale time, in cents (frozen).
    pub subtotal_cents: i64,
}

impl TransactionDetail {
    /// Returns the line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

/// A completed sale: header plus its line items, created atomically.
///
/// Never updated after creation; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Database-assigned identity.
    pub id: i64,

    /// Sum of detail subtotals, in cents.
    pub total_cents: i64,

    /// When the transaction was committed.
    pub created_at: DateTime<Utc>,

    /// Line items in checkout input order.
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Returns the transaction total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Daily Report
// =============================================================================

/// The best-selling product of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub quantity_sold: i64,
}

impl Default for TopProduct {
    /// Sentinel used when no sales occurred today.
    fn default() -> Self {
        TopProduct {
            name: "-".to_string(),
            quantity_sold: 0,
        }
    }
}

/// An on-demand aggregate over today's transactions.
///
/// Derived, never persisted. Recomputed from storage on every request;
/// a day with no sales is a valid report (zeros plus the sentinel top
/// product), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Sum of `total_cents` over today's transactions.
    pub total_revenue_cents: i64,

    /// Count of today's transactions.
    pub transaction_count: i64,

    /// Best-selling product today, by summed quantity.
    pub top_product: TopProduct,
}

impl DailyReport {
    /// Report for a day with no sales.
    pub fn empty() -> Self {
        DailyReport {
            total_revenue_cents: 0,
            transaction_count: 0,
            top_product: TopProduct::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
