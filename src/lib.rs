//! # Stockroom
//!
//! A server-rendered product catalog manager: one entity (Product) with
//! list, detail, create, edit, and delete views, backed by a pluggable
//! relational store.
//!
//! ## Architecture
//!
//! - **Product record**: the persisted entity (`core::product`)
//! - **Store**: persistence abstraction over a single product collection
//!   (`core::store`), with in-memory and PostgreSQL backends (`storage`)
//! - **Catalog service**: five pass-through CRUD operations over the store
//!   (`core::service`)
//! - **Web exposure**: axum routes, handlers, and Tera views (`web`)
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use stockroom::prelude::*;
//!
//! AppBuilder::new()
//!     .with_store(InMemoryProductStore::new())
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```
//!
//! Requests are handled independently and statelessly; a missing identifier
//! renders a 404 page, invalid form input redisplays the form with the
//! submitted values, and successful mutations redirect to the listing.

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod web;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{AppError, AppResult},
        product::{Product, ProductDraft, ProductForm},
        service::CatalogService,
        store::ProductStore,
    };

    // === Storage ===
    pub use crate::storage::InMemoryProductStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresProductStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend, StorageConfig};

    // === Server & web ===
    pub use crate::server::AppBuilder;
    pub use crate::web::{AppState, Views, build_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
