//! PostgreSQL storage backend using sqlx.
//!
//! Provides a `PostgresProductStore` implementation backed by a PostgreSQL
//! database via `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! stockroom = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! Products are stored in a `products` table with a `BIGSERIAL` primary key
//! (the store-assigned identifier), a `NUMERIC(19, 4)` price column mapped to
//! `rust_decimal::Decimal`, and `TIMESTAMPTZ` timestamps.

use crate::core::product::{Product, ProductDraft};
use crate::core::store::ProductStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required table (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price NUMERIC(19, 4) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create products table: {}", e))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// PostgresProductStore
// ---------------------------------------------------------------------------

/// Product store backed by PostgreSQL.
///
/// Identifiers come from the table's `BIGSERIAL` sequence; timestamps are
/// written by the application so the column values match what the caller
/// gets back.
#[derive(Clone, Debug)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Create a new `PostgresProductStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, price, created_at, updated_at";

fn product_from_row(row: &PgRow) -> Result<Product> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list products: {}", e))?;

        rows.iter().map(product_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get product {}: {}", id, e))?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "INSERT INTO products (name, price, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&draft.name)
        .bind(draft.price)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to insert product: {}", e))?;

        product_from_row(&row)
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            "UPDATE products SET name = $2, price = $3, updated_at = $4
             WHERE id = $1
             RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(draft.price)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update product {}: {}", id, e))?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete product {}: {}", id, e))?;

        Ok(result.rows_affected() > 0)
    }
}
