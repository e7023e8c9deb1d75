//! # Transaction Repository
//!
//! The atomic checkout and reads over the transaction ledger.
//!
//! ## Checkout Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         Checkout Lifecycle                           │
//! │                                                                      │
//! │  1. VALIDATE INPUT                                                   │
//! │     └── non-empty, every quantity positive → else InvalidInput       │
//! │                                                                      │
//! │  2. OPEN ATOMIC SCOPE (pool.begin())                                 │
//! │     └── rollback-on-drop: any early return leaves storage untouched  │
//! │                                                                      │
//! │  3. PER ITEM, IN INPUT ORDER                                         │
//! │     ├── fetch product row inside the scope                           │
//! │     │     └── missing → NotFound, whole checkout rolls back          │
//! │     ├── stock < quantity → InsufficientStock, rolls back             │
//! │     ├── subtotal = quantity × current price, accumulate total        │
//! │     ├── decrement stock                                              │
//! │     └── record detail with the snapshotted name                      │
//! │                                                                      │
//! │  4. INSERT HEADER (RETURNING id), then detail rows in item order     │
//! │                                                                      │
//! │  5. COMMIT → fully populated Transaction                             │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries live here: a failed checkout is reported as-is and the caller
//! decides whether to resubmit.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use toko_core::validation::validate_checkout;
use toko_core::{CheckoutItem, Money, Product, Transaction, TransactionDetail};

/// Repository for checkout and transaction ledger operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Processes a checkout as one atomic unit.
    ///
    /// Validates and prices each line in input order, decrements stock,
    /// and persists the transaction header plus detail rows. Either every
    /// write lands or none does: the sqlx transaction rolls back on drop,
    /// so each error path below leaves stock and the ledger unchanged.
    ///
    /// ## Errors
    /// * `InvalidInput` - empty item list or non-positive quantity
    /// * `NotFound` - an item references an unknown product id
    /// * `InsufficientStock` - an item requests more units than available
    /// * Storage variants for any query/commit failure
    pub async fn checkout(&self, items: &[CheckoutItem]) -> DbResult<Transaction> {
        validate_checkout(items)?;

        debug!(items = items.len(), "Opening checkout scope");

        let mut tx = self.pool.begin().await?;

        let mut total = Money::zero();
        let mut details: Vec<TransactionDetail> = Vec::with_capacity(items.len());

        for item in items {
            // Fetch inside the scope so concurrent checkouts see a
            // consistent snapshot of price and stock.
            let product = sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, price_cents, stock, created_at, updated_at
                FROM products
                WHERE id = ?1
                "#,
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Product", item.product_id))?;

            if !product.can_sell(item.quantity) {
                return Err(DbError::InsufficientStock {
                    product: product.name,
                    available: product.stock,
                    requested: item.quantity,
                });
            }

            let subtotal = product.price() * item.quantity;
            total += subtotal;

            sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - ?1,
                    updated_at = ?2
                WHERE id = ?3
                "#,
            )
            .bind(item.quantity)
            .bind(Utc::now())
            .bind(item.product_id)
            .execute(&mut *tx)
            .await?;

            details.push(TransactionDetail {
                transaction_id: 0, // assigned after the header insert
                product_id: item.product_id,
                product_name: product.name,
                quantity: item.quantity,
                subtotal_cents: subtotal.cents(),
            });
        }

        let created_at = Utc::now();

        let transaction_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (total_cents, created_at)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(total.cents())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await?;

        for detail in &mut details {
            detail.transaction_id = transaction_id;

            sqlx::query(
                r#"
                INSERT INTO transaction_details
                    (transaction_id, product_id, product_name, quantity, subtotal_cents)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(detail.transaction_id)
            .bind(detail.product_id)
            .bind(&detail.product_name)
            .bind(detail.quantity)
            .bind(detail.subtotal_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            transaction_id = %transaction_id,
            total_cents = %total.cents(),
            items = details.len(),
            "Checkout committed"
        );

        Ok(Transaction {
            id: transaction_id,
            total_cents: total.cents(),
            created_at,
            details,
        })
    }

    /// Gets a transaction by ID, details in their original item order.
    ///
    /// ## Returns
    /// * `Ok(Some(Transaction))` - Transaction found
    /// * `Ok(None)` - Transaction not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Transaction>> {
        let header: Option<(i64, DateTime<Utc>)> =
            sqlx::query_as("SELECT total_cents, created_at FROM transactions WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some((total_cents, created_at)) = header else {
            return Ok(None);
        };

        let details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT transaction_id, product_id, product_name, quantity, subtotal_cents
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Transaction {
            id,
            total_cents,
            created_at,
            details,
        }))
    }

    /// Counts ledger transactions (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use toko_core::{NewProduct, Product, ValidationError};

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
    async fn test_checkout_prices_and_decrements() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 5).await;
        let b = seed_product(&db, "Product B", 20, 3).await;

        let transaction = db
            .transactions()
            .checkout(&[item(a.id, 2), item(b.id, 1)])
            .await
            .unwrap();

        assert_eq!(transaction.total_cents, 40);
        assert_eq!(transaction.details.len(), 2);

        assert_eq!(transaction.details[0].product_name, "Product A");
        assert_eq!(transaction.details[0].quantity, 2);
        assert_eq!(transaction.details[0].subtotal_cents, 20);

        assert_eq!(transaction.details[1].product_name, "Product B");
        assert_eq!(transaction.details[1].quantity, 1);
        assert_eq!(transaction.details[1].subtotal_cents, 20);

        let a_after = db.products().get_by_id(a.id).await.unwrap().unwrap();
        let b_after = db.products().get_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a_after.stock, 3);
        assert_eq!(b_after.stock, 2);
    }

    #[tokio::test]
    async fn test_total_is_sum_of_detail_subtotals() {
        let db = test_db().await;
        let a = seed_product(&db, "Rice 5kg", 6500, 10).await;
        let b = seed_product(&db, "Egg Tray", 2800, 10).await;

        let transaction = db
            .transactions()
            .checkout(&[item(a.id, 3), item(b.id, 2)])
            .await
            .unwrap();

        let detail_sum: i64 = transaction.details.iter().map(|d| d.subtotal_cents).sum();
        assert_eq!(transaction.total_cents, detail_sum);
        assert_eq!(transaction.total_cents, 3 * 6500 + 2 * 2800);
    }

    #[tokio::test]
    async fn test_unknown_product_rolls_back_everything() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 5).await;

        // First line is valid and decrements stock inside the scope; the
        // second line fails and must undo it.
        let err = db
            .transactions()
            .checkout(&[item(a.id, 2), item(999, 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let a_after = db.products().get_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(a_after.stock, 5);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insufficient_stock_rejected_before_mutation() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 5).await;
        let b = seed_product(&db, "Product B", 20, 3).await;

        let err = db
            .transactions()
            .checkout(&[item(a.id, 1), item(b.id, 4)])
            .await
            .unwrap_err();

        match err {
            DbError::InsufficientStock {
                product,
                available,
                requested,
            } => {
                assert_eq!(product, "Product B");
                assert_eq!(available, 3);
                assert_eq!(requested, 4);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        let a_after = db.products().get_by_id(a.id).await.unwrap().unwrap();
        let b_after = db.products().get_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a_after.stock, 5);
        assert_eq!(b_after.stock, 3);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_rejected_at_entry() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 5).await;

        let err = db.transactions().checkout(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::InvalidInput(ValidationError::EmptyCheckout)
        ));

        let err = db
            .transactions()
            .checkout(&[item(a.id, 0)])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidInput(_)));

        let a_after = db.products().get_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(a_after.stock, 5);
    }

    #[tokio::test]
    async fn test_exact_stock_sells_out_to_zero() {
        let db = test_db().await;
        let a = seed_product(&db, "Last Units", 100, 3).await;

        db.transactions().checkout(&[item(a.id, 3)]).await.unwrap();

        let a_after = db.products().get_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(a_after.stock, 0);

        // Now empty; the next sale must be rejected.
        let err = db
            .transactions()
            .checkout(&[item(a.id, 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::InsufficientStock { .. }));
    }

    #[tokio::test]
    async fn test_repeated_item_accumulates() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 5).await;

        // The same product twice in one checkout: each line is processed in
        // input order against the then-current stock.
        let transaction = db
            .transactions()
            .checkout(&[item(a.id, 2), item(a.id, 3)])
            .await
            .unwrap();

        assert_eq!(transaction.total_cents, 50);
        let a_after = db.products().get_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(a_after.stock, 0);
    }

    #[tokio::test]
    async fn test_get_by_id_round_trip() {
        let db = test_db().await;
        let a = seed_product(&db, "Product A", 10, 5).await;
        let b = seed_product(&db, "Product B", 20, 3).await;

        let created = db
            .transactions()
            .checkout(&[item(a.id, 2), item(b.id, 1)])
            .await
            .unwrap();

        let fetched = db
            .transactions()
            .get_by_id(created.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.total_cents, created.total_cents);
        assert_eq!(fetched.details, created.details);

        assert!(db.transactions().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_name_snapshot_survives_rename() {
        let db = test_db().await;
        let a = seed_product(&db, "Original Name", 10, 5).await;

        let created = db.transactions().checkout(&[item(a.id, 1)]).await.unwrap();

        db.products().update(a.id, "Renamed", 15).await.unwrap();

        let fetched = db
            .transactions()
            .get_by_id(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.details[0].product_name, "Original Name");
        assert_eq!(fetched.details[0].subtotal_cents, 10);
    }
}
