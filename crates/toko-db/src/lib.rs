//! # toko-db: Database Layer for the Toko Backend
//!
//! This crate provides database access for the Toko store-management
//! backend. It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         Toko Data Flow                               │
//! │                                                                      │
//! │  Service handler (checkout, report, catalog)                         │
//! │       │                                                              │
//! │       ▼                                                              │
//! │  ┌────────────────────────────────────────────────────────────────┐  │
//! │  │                     toko-db (THIS CRATE)                       │  │
//! │  │                                                                │  │
//! │  │   ┌──────────────┐   ┌────────────────┐   ┌────────────────┐  │  │
//! │  │   │   Database   │   │  Repositories  │   │   Migrations   │  │  │
//! │  │   │  (pool.rs)   │   │ product.rs     │   │   (embedded)   │  │  │
//! │  │   │              │◄──│ transaction.rs │   │ 001_initial... │  │  │
//! │  │   │  SqlitePool  │   │ report.rs      │   │                │  │  │
//! │  │   └──────────────┘   └────────────────┘   └────────────────┘  │  │
//! │  └────────────────────────────────────────────────────────────────┘  │
//! │       │                                                              │
//! │       ▼                                                              │
//! │  SQLite database file (or :memory: in tests)                         │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, transaction, report)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toko_db::{Database, DbConfig};
//! use toko_core::CheckoutItem;
//!
//! let db = Database::new(DbConfig::new("path/to/toko.db")).await?;
//!
//! // Atomic checkout: prices, decrements stock, persists the ledger rows
//! let transaction = db
//!     .transactions()
//!     .checkout(&[CheckoutItem { product_id: 1, quantity: 2 }])
//!     .await?;
//!
//! // Aggregate over today's sales
//! let report = db.reports().daily_report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
pub use repository::transaction::TransactionRepository;
