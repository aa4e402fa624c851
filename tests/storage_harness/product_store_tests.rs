//! Macro-generated test suite for `ProductStore` contract validation.
//!
//! `product_store_tests!` generates a test module that validates any
//! `ProductStore` implementation against the full contract: CRUD operations,
//! id assignment, timestamp handling, and the not-found conventions
//! (`None` from get/update, `false` from delete).
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use stockroom::storage::InMemoryProductStore;
//!
//! product_store_tests!(InMemoryProductStore::new());
//! ```

/// Generate a full `ProductStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance implementing
/// `ProductStore` with an empty collection. It is re-evaluated for each test
/// to ensure isolation; `.await` expressions are allowed since the expansion
/// sits inside async tests.
#[macro_export]
macro_rules! product_store_tests {
    ($factory:expr) => {
        mod product_store_contract_tests {
            use super::*;
            use stockroom::core::store::ProductStore;

            // ==================================================================
            // Insert & get
            // ==================================================================

            #[tokio::test]
            async fn test_insert_then_get() {
                let store = $factory;

                let created = store.insert(draft("Widget", "19.99")).await.unwrap();
                assert!(created.id >= 1, "id should be store-assigned");
                assert_eq!(created.name, "Widget");
                assert_eq!(created.price, dec("19.99"));
                assert!(created.updated_at >= created.created_at);

                let fetched = store.get(created.id).await.unwrap();
                let fetched = fetched.expect("product should exist after insert");
                assert_eq!(fetched.id, created.id);
                assert_eq!(fetched.name, "Widget");
                assert_eq!(fetched.price, dec("19.99"));
            }

            #[tokio::test]
            async fn test_get_missing_returns_none() {
                let store = $factory;
                let result = store.get(987_654).await.unwrap();
                assert!(result.is_none(), "missing id should yield None");
            }

            #[tokio::test]
            async fn test_insert_assigns_distinct_ids() {
                let store = $factory;

                let a = store.insert(draft("A", "1.00")).await.unwrap();
                let b = store.insert(draft("B", "2.00")).await.unwrap();
                let c = store.insert(draft("C", "3.00")).await.unwrap();

                assert!(a.id < b.id && b.id < c.id, "ids should be ascending");
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                let all = store.list().await.unwrap();
                assert!(all.is_empty(), "fresh store should list nothing");
            }

            #[tokio::test]
            async fn test_list_contains_every_insert() {
                let store = $factory;

                for name in ["Hammer", "Screwdriver", "Wrench"] {
                    store.insert(draft(name, "5.00")).await.unwrap();
                }

                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 3);
                for name in ["Hammer", "Screwdriver", "Wrench"] {
                    assert!(
                        all.iter().any(|p| p.name == name),
                        "listing should contain '{}'",
                        name
                    );
                }

                let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
                let mut sorted = ids.clone();
                sorted.sort_unstable();
                assert_eq!(ids, sorted, "listing should be in ascending id order");
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_replaces_name_and_price() {
                let store = $factory;
                let created = store.insert(draft("Widget", "1.00")).await.unwrap();

                let updated = store
                    .update(created.id, draft("Widget v2", "2.50"))
                    .await
                    .unwrap()
                    .expect("update of existing id should succeed");

                assert_eq!(updated.id, created.id, "id is immutable");
                assert_eq!(updated.name, "Widget v2");
                assert_eq!(updated.price, dec("2.50"));
                assert!(updated.updated_at >= created.updated_at);

                let fetched = store.get(created.id).await.unwrap().unwrap();
                assert_eq!(fetched.name, "Widget v2");
                assert_eq!(fetched.price, dec("2.50"));
            }

            #[tokio::test]
            async fn test_update_missing_returns_none() {
                let store = $factory;
                let result = store.update(987_654, draft("X", "1.00")).await.unwrap();
                assert!(result.is_none(), "updating a missing id should yield None");
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_then_get_returns_none() {
                let store = $factory;
                let created = store.insert(draft("Widget", "1.00")).await.unwrap();

                assert!(store.delete(created.id).await.unwrap());
                assert!(store.get(created.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_missing_returns_false() {
                let store = $factory;
                assert!(!store.delete(987_654).await.unwrap());
            }

            #[tokio::test]
            async fn test_delete_only_removes_target() {
                let store = $factory;
                let keep = store.insert(draft("Keep", "1.00")).await.unwrap();
                let doomed = store.insert(draft("Doomed", "2.00")).await.unwrap();

                store.delete(doomed.id).await.unwrap();

                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0].id, keep.id);
            }
        }
    };
}
