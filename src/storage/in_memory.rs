//! In-memory implementation of ProductStore for testing and development

use crate::core::product::{Product, ProductDraft};
use crate::core::store::ProductStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory product store
///
/// The default backend, also used by the test suites. Uses RwLock for
/// thread-safe access; a BTreeMap keeps listings in ascending id order.
/// Identifiers come from an atomic sequence starting at 1.
#[derive(Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.get(&id).cloned())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let product = Product {
            id,
            name: draft.name,
            price: draft.price,
            created_at: now,
            updated_at: now,
        };

        products.insert(id, product.clone());

        Ok(product)
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Option<Product>> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match products.get_mut(&id) {
            Some(product) => {
                product.name = draft.name;
                product.price = draft.price;
                product.updated_at = Utc::now();
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: price.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryProductStore::new();

        let first = store.insert(draft("Widget", "1.00")).await.unwrap();
        let second = store.insert(draft("Gadget", "2.00")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = InMemoryProductStore::new();
        let created = store.insert(draft("Widget", "19.99")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = InMemoryProductStore::new();
        assert!(store.get(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_products_in_id_order() {
        let store = InMemoryProductStore::new();
        store.insert(draft("A", "1")).await.unwrap();
        store.insert(draft("B", "2")).await.unwrap();
        store.insert(draft("C", "3")).await.unwrap();

        let all = store.list().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_name_and_price() {
        let store = InMemoryProductStore::new();
        let created = store.insert(draft("Widget", "1.00")).await.unwrap();

        let updated = store
            .update(created.id, draft("Widget v2", "2.50"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Widget v2");
        assert_eq!(updated.price, "2.50".parse().unwrap());
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = InMemoryProductStore::new();
        let result = store.update(404, draft("X", "1")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_none() {
        let store = InMemoryProductStore::new();
        let created = store.insert(draft("Widget", "1.00")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = InMemoryProductStore::new();
        assert!(!store.delete(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryProductStore::new();
        let first = store.insert(draft("A", "1")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.insert(draft("B", "2")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store = InMemoryProductStore::new();

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(draft(&format!("P{}", i), "1.00")).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
