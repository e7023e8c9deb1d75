//! # toko-core: Pure Business Logic for the Toko Backend
//!
//! This crate is the **heart** of the Toko store-management backend. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         Toko Architecture                            │
//! │                                                                      │
//! │  ┌────────────────────────────────────────────────────────────────┐  │
//! │  │                  Service Layer (HTTP, external)                │  │
//! │  │     POST /checkout ──► GET /report ──► catalog endpoints       │  │
//! │  └──────────────────────────────┬─────────────────────────────────┘  │
//! │                                 │                                    │
//! │  ┌──────────────────────────────▼─────────────────────────────────┐  │
//! │  │                 ★ toko-core (THIS CRATE) ★                     │  │
//! │  │                                                                │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │  │
//! │  │   │   types   │  │   money   │  │ validation │  │  error   │  │  │
//! │  │   │  Product  │  │   Money   │  │   rules    │  │  typed   │  │  │
//! │  │   │Transaction│  │  i64 math │  │   checks   │  │  errors  │  │  │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │  │
//! │  │                                                                │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └──────────────────────────────┬─────────────────────────────────┘  │
//! │                                 │                                    │
//! │  ┌──────────────────────────────▼─────────────────────────────────┐  │
//! │  │                    toko-db (Database Layer)                    │  │
//! │  │        SQLite queries, migrations, checkout, daily report      │  │
//! │  └────────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, DailyReport, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use toko_core::Money` instead of
// `use toko_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single checkout.
///
/// ## Business Reason
/// Prevents runaway requests and keeps the atomic checkout scope bounded.
pub const MAX_CHECKOUT_ITEMS: usize = 100;

/// Maximum quantity of a single item in a checkout.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
