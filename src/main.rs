//! Binary entrypoint: load configuration, pick a store, serve.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use stockroom::config::{AppConfig, StorageBackend};
use stockroom::core::store::ProductStore;
use stockroom::server::AppBuilder;
use stockroom::storage::InMemoryProductStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    tracing::info!(backend = ?config.storage.backend, "Starting stockroom");

    let store = build_store(&config).await?;
    AppBuilder::new()
        .with_shared_store(store)
        .serve(&config.bind_addr)
        .await
}

/// Read the config file named by `STOCKROOM_CONFIG`, or fall back to defaults.
fn load_config() -> Result<AppConfig> {
    match std::env::var("STOCKROOM_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "Loading configuration");
            AppConfig::from_yaml_file(&path)
        }
        Err(_) => Ok(AppConfig::default()),
    }
}

/// Construct the configured storage backend.
async fn build_store(config: &AppConfig) -> Result<Arc<dyn ProductStore>> {
    match config.storage.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryProductStore::new())),

        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            use sqlx::postgres::PgPoolOptions;
            use stockroom::storage::PostgresProductStore;
            use stockroom::storage::postgres::ensure_schema;

            let url = config.storage.database_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url is required for the postgres backend")
            })?;

            let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            ensure_schema(&pool).await?;

            Ok(Arc::new(PostgresProductStore::new(pool)))
        }

        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => anyhow::bail!(
            "stockroom was built without the postgres feature; rebuild with --features postgres"
        ),
    }
}
