//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - CRUD over catalog rows with integer identities
//! - Restocking via delta adjustment
//!
//! Stock *decrements* are not here: selling happens exclusively inside the
//! checkout's transactional scope in
//! [`crate::repository::transaction::TransactionRepository`], so that pricing,
//! stock, and the ledger move together or not at all.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use toko_core::validation::{validate_price_cents, validate_product_name, validate_stock};
use toko_core::{NewProduct, Product};

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo
///     .insert(&NewProduct { name: "Mineral Water 600ml".into(), price_cents: 500, stock: 24 })
///     .await?;
/// let found = repo.get_by_id(product.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns it with its database-assigned id.
    ///
    /// ## Errors
    /// * `InvalidInput` - empty name, negative price or stock
    pub async fn insert(&self, new: &NewProduct) -> DbResult<Product> {
        validate_product_name(&new.name)?;
        validate_price_cents(new.price_cents)?;
        validate_stock(new.stock)?;

        debug!(name = %new.name, "Inserting product");

        let now = Utc::now();
        let name = new.name.trim().to_string();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, price_cents, stock, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id
            "#,
        )
        .bind(&name)
        .bind(new.price_cents)
        .bind(new.stock)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product {
            id,
            name,
            price_cents: new.price_cents,
            stock: new.stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, stock, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists products sorted by name.
    pub async fn list(&self, limit: u32) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, stock, created_at, updated_at
            FROM products
            ORDER BY name
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Updates a product's name and price.
    ///
    /// Stock is deliberately not updatable here; use [`Self::restock`] so
    /// adjustments stay relative and auditable.
    ///
    /// ## Errors
    /// * `NotFound` - Product doesn't exist
    /// * `InvalidInput` - empty name or negative price
    pub async fn update(&self, id: i64, name: &str, price_cents: i64) -> DbResult<()> {
        validate_product_name(name)?;
        validate_price_cents(price_cents)?;

        debug!(id = %id, "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price_cents = ?3,
                updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name.trim())
        .bind(price_cents)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Adjusts product stock by a delta (positive for restocking).
    ///
    /// ## Delta Pattern
    /// ```text
    /// ❌ WRONG: absolute update (races with concurrent checkouts)
    ///    UPDATE products SET stock = 7 WHERE id = ?
    ///
    /// ✅ CORRECT: delta update
    ///    UPDATE products SET stock = stock + 3 WHERE id = ?
    /// ```
    /// The schema's `CHECK (stock >= 0)` rejects a delta that would drive
    /// stock negative.
    ///
    /// ## Errors
    /// * `NotFound` - Product doesn't exist
    pub async fn restock(&self, id: i64, delta: i64) -> DbResult<()> {
        debug!(id = %id, delta = %delta, "Adjusting stock");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock + ?2,
                updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(delta)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// Historical transaction details keep their name snapshot, so deleting
    /// a product never rewrites the ledger.
    ///
    /// ## Errors
    /// * `NotFound` - Product doesn't exist
    /// * `ForeignKeyViolation` - Product is referenced by ledger rows
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts catalog products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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
    use toko_core::ValidationError;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_product(name: &str, price_cents: i64, stock: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price_cents,
            stock,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.products();

        let inserted = repo
            .insert(&new_product("Mineral Water 600ml", 500, 24))
            .await
            .unwrap();
        assert!(inserted.id > 0);

        let found = repo.get_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Mineral Water 600ml");
        assert_eq!(found.price_cents, 500);
        assert_eq!(found.stock, 24);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = test_db().await;
        assert!(db.products().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid() {
        let db = test_db().await;
        let repo = db.products();

        let err = repo.insert(&new_product("", 500, 1)).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::InvalidInput(ValidationError::Required { .. })
        ));

        let err = repo
            .insert(&new_product("Soap Bar", -10, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidInput(_)));

        let err = repo
            .insert(&new_product("Soap Bar", 10, -1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_and_restock() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo
            .insert(&new_product("Instant Noodles", 350, 10))
            .await
            .unwrap();

        repo.update(product.id, "Instant Noodles Jumbo", 450)
            .await
            .unwrap();
        repo.restock(product.id, 5).await.unwrap();

        let found = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Instant Noodles Jumbo");
        assert_eq!(found.price_cents, 450);
        assert_eq!(found.stock, 15);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_db().await;
        let err = db.products().update(999, "Ghost", 100).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_and_count() {
        let db = test_db().await;
        let repo = db.products();

        let a = repo.insert(&new_product("Tea Bags", 700, 3)).await.unwrap();
        repo.insert(&new_product("Coffee Sachet", 150, 40))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.delete(a.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        let err = repo.delete(a.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&new_product("Sugar 1kg", 1400, 8))
            .await
            .unwrap();
        repo.insert(&new_product("Cooking Oil 1L", 1800, 6))
            .await
            .unwrap();

        let products = repo.list(10).await.unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cooking Oil 1L", "Sugar 1kg"]);
    }
}
