//! # Report Repository
//!
//! Read-only aggregation over the transaction ledger.
//!
//! ## Daily Report
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                       GetDailyReport Flow                            │
//! │                                                                      │
//! │  Query 1: totals                                                     │
//! │    SUM(total_cents), COUNT(id) over today's transactions             │
//! │    └── COALESCE keeps an empty day at zero instead of NULL           │
//! │                                                                      │
//! │  Query 2: top product                                                │
//! │    details ⋈ transactions ⋈ products, grouped by product name,       │
//! │    summed quantity, max selected                                     │
//! │    └── no rows → sentinel TopProduct { "-", 0 }, never an error      │
//! │                                                                      │
//! │  "Today" is DATE('now') - the storage engine's clock (UTC), not the  │
//! │  caller's.                                                           │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use toko_core::{DailyReport, TopProduct};

/// Repository for sales report queries. Read-only.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Computes today's sales report from current ledger state.
    ///
    /// Recomputed on every call; no caching. A day without sales yields
    /// zero totals and the sentinel top product rather than an error.
    ///
    /// Ties on the top product are broken deterministically: the
    /// lexicographically smallest product name wins.
    pub async fn daily_report(&self) -> DbResult<DailyReport> {
        debug!("Computing daily report");

        let (total_revenue_cents, transaction_count): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_cents), 0), COUNT(id)
            FROM transactions
            WHERE DATE(created_at) = DATE('now')
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let top: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT p.name, SUM(td.quantity) AS total_qty
            FROM transaction_details td
            JOIN transactions t ON td.transaction_id = t.id
            JOIN products p ON td.product_id = p.id
            WHERE DATE(t.created_at) = DATE('now')
            GROUP BY p.name
            ORDER BY total_qty DESC, p.name ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        let top_product = match top {
            Some((name, quantity_sold)) => TopProduct {
                name,
                quantity_sold,
            },
            None => TopProduct::default(),
        };

        Ok(DailyReport {
            total_revenue_cents,
            transaction_count,
            top_product,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use toko_core::{CheckoutItem, NewProduct, Product};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_product(db: &Database, name: &str, price_cents: i64, stock: i64) -> Product {
        db.products()
            .insert(&NewProduct {
                name: name.to_string(),
                price_cents,
                stock,
            })
            .await
            .unwrap()
    }

    fn item(product_id: i64, quantity: i64) -> CheckoutItem {
        CheckoutItem {
            product_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_empty_day_yields_defaults() {
        let db = test_db().await;

        let report = db.reports().daily_report().await.unwrap();

        assert_eq!(report.total_revenue_cents, 0);
        assert_eq!(report.transaction_count, 0);
        assert_eq!(report.top_product.name, "-");
        assert_eq!(report.top_product.quantity_sold, 0);
    }

    #[tokio::test]
    async fn test_totals_and_top_product() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 50).await;
        let b = seed_product(&db, "Product B", 20, 50).await;

        db.transactions()
            .checkout(&[item(a.id, 2), item(b.id, 1)])
            .await
            .unwrap();
        db.transactions().checkout(&[item(b.id, 5)]).await.unwrap();

        let report = db.reports().daily_report().await.unwrap();

        // 2×10 + 1×20 = 40, 5×20 = 100
        assert_eq!(report.total_revenue_cents, 140);
        assert_eq!(report.transaction_count, 2);
        // A sold 2, B sold 6
        assert_eq!(report.top_product.name, "Product B");
        assert_eq!(report.top_product.quantity_sold, 6);
    }

    #[tokio::test]
    async fn test_tie_breaks_on_smallest_name() {
        let db = test_db().await;
        let banana = seed_product(&db, "Banana", 10, 50).await;
        let apple = seed_product(&db, "Apple", 10, 50).await;

        db.transactions()
            .checkout(&[item(banana.id, 3), item(apple.id, 3)])
            .await
            .unwrap();

        let report = db.reports().daily_report().await.unwrap();
        assert_eq!(report.top_product.name, "Apple");
        assert_eq!(report.top_product.quantity_sold, 3);
    }

    #[tokio::test]
    async fn test_report_is_idempotent() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 50).await;

        db.transactions().checkout(&[item(a.id, 4)]).await.unwrap();

        let first = db.reports().daily_report().await.unwrap();
        let second = db.reports().daily_report().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_failed_checkout_leaves_report_unchanged() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 50).await;

        db.transactions().checkout(&[item(a.id, 1)]).await.unwrap();
        let before = db.reports().daily_report().await.unwrap();

        let _ = db
            .transactions()
            .checkout(&[item(a.id, 1), item(999, 1)])
            .await
            .unwrap_err();

        let after = db.reports().daily_report().await.unwrap();
        assert_eq!(before, after);
    }
}
