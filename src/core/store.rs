//! Storage trait for product persistence

use crate::core::product::{Product, ProductDraft};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence abstraction over a single collection of products.
///
/// Implementations are the sole authority on identifiers and timestamps:
/// `insert` assigns the id and both timestamps, `update` refreshes
/// `updated_at` and leaves id and `created_at` untouched. The application is
/// agnostic to the underlying storage mechanism.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List all products in ascending id order
    async fn list(&self) -> Result<Vec<Product>>;

    /// Get a product by id; `None` means not found
    async fn get(&self, id: i64) -> Result<Option<Product>>;

    /// Insert a new product, assigning its id and timestamps
    async fn insert(&self, draft: ProductDraft) -> Result<Product>;

    /// Replace name and price of an existing product; `None` means not found
    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Option<Product>>;

    /// Delete a product; `false` means not found
    async fn delete(&self, id: i64) -> Result<bool>;
}
