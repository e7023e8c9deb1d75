//! # Database Error Types
//!
//! Error types for storage operations and checkout outcomes.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        Error Propagation                             │
//! │                                                                      │
//! │  SQLite Error (sqlx::Error)                                          │
//! │       │                                                              │
//! │       ▼                                                              │
//! │  DbError (this module) ← adds context and categorization             │
//! │       │                                                              │
//! │       ▼                                                              │
//! │  Service layer maps variants to responses                            │
//! │  (NotFound → 404-class, InvalidInput/InsufficientStock → 4xx-class,  │
//! │   everything else → 500-class)                                       │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checkout outcomes (`NotFound`, `InsufficientStock`, `InvalidInput`) live
//! alongside the storage failures because the repository is the crate's
//! public surface; callers get one error type with distinguishable variants.

use thiserror::Error;
use toko_core::ValidationError;

/// Database operation errors.
///
/// These wrap sqlx errors and carry the domain outcomes of the checkout.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - A checkout line references an unknown product id
    /// - Update/delete matched zero rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A checkout line requested more units than the product has.
    ///
    /// Raised inside the transactional scope, before any decrement of the
    /// affected row; the whole checkout rolls back.
    #[error("insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Caller input failed validation before any storage work.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Unique constraint violation.
    #[error("duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a detail row referencing a missing transaction or product
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Transactional scope open/commit failure.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                //   "UNIQUE constraint failed: <table>.<column>"
                //   "FOREIGN KEY constraint failed"
                //   "CHECK constraint failed: <expr>"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
