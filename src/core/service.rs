//! The catalog service: a thin pass-through over the product store

use crate::core::product::{Product, ProductDraft};
use crate::core::store::ProductStore;
use anyhow::Result;
use std::sync::Arc;

/// Service wrapping a `ProductStore` with the five catalog operations.
///
/// Each operation is a near 1:1 forward to the store; the service adds no
/// business logic and holds no state between requests. Handlers go through it
/// rather than the store so the exposure layer never depends on a concrete
/// backend.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    /// Create a service over a concrete store
    pub fn new(store: impl ProductStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a service over an already-shared store
    pub fn from_arc(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// List all products
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.store.list().await
    }

    /// Get a product by id; `None` means not found
    pub async fn product(&self, id: i64) -> Result<Option<Product>> {
        self.store.get(id).await
    }

    /// Add a new product
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product> {
        let product = self.store.insert(draft).await?;
        tracing::debug!(id = product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replace name and price of an existing product; `None` means not found
    pub async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<Option<Product>> {
        let updated = self.store.update(id, draft).await?;
        if updated.is_some() {
            tracing::debug!(id, "product updated");
        }
        Ok(updated)
    }

    /// Delete a product; `false` means not found
    pub async fn remove_product(&self, id: i64) -> Result<bool> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::debug!(id, "product deleted");
        }
        Ok(deleted)
    }
}
