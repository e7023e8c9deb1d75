//! # Repository Module
//!
//! Database repository implementations for the Toko backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                     Repository Pattern Explained                     │
//! │                                                                      │
//! │  The Repository pattern abstracts database access behind a clean API.│
//! │                                                                      │
//! │  Service handler                                                     │
//! │       │                                                              │
//! │       │  db.transactions().checkout(&items)                          │
//! │       ▼                                                              │
//! │  TransactionRepository                                               │
//! │  ├── checkout(&self, items)      ← one atomic scope                  │
//! │  └── get_by_id(&self, id)                                            │
//! │       │                                                              │
//! │       │  SQL                                                         │
//! │       ▼                                                              │
//! │  SQLite Database                                                     │
//! │                                                                      │
//! │  Benefits:                                                           │
//! │  • SQL is isolated in one place                                      │
//! │  • Clean separation of concerns                                      │
//! │  • Easy to test against an in-memory database                        │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product catalog CRUD and restocking
//! - [`transaction::TransactionRepository`] - Atomic checkout and ledger reads
//! - [`report::ReportRepository`] - Daily sales aggregation

pub mod product;
pub mod report;
pub mod transaction;
