//! AppBuilder for fluent API to build the catalog application

use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::core::service::CatalogService;
use crate::core::store::ProductStore;
use crate::web::handlers::AppState;
use crate::web::router::build_routes;
use crate::web::views::Views;

/// Builder wiring a product store into a servable router
///
/// # Example
///
/// ```ignore
/// let app = AppBuilder::new()
///     .with_store(InMemoryProductStore::new())
///     .build()?;
/// ```
pub struct AppBuilder {
    store: Option<Arc<dyn ProductStore>>,
}

impl AppBuilder {
    /// Create a new AppBuilder
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Set the product store (required)
    pub fn with_store(mut self, store: impl ProductStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already-shared product store
    pub fn with_shared_store(mut self, store: Arc<dyn ProductStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the application router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow!("AppBuilder requires a product store"))?;

        let service = CatalogService::from_arc(store);
        let views = Views::new()?;
        let state = AppState { service, views };

        Ok(build_routes(state).layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
