//! Route table for the catalog

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::web::handlers::{
    AppState, create, delete_confirm, destroy, detail, edit, edit_form, index, new_form, root,
};

/// Build the catalog routes:
/// - GET /                           - redirect to the listing
/// - GET /products                   - listing view
/// - GET|POST /products/new          - create form / create
/// - GET /products/{id}              - detail view
/// - GET|POST /products/{id}/edit    - edit form / full replace
/// - GET|POST /products/{id}/delete  - confirmation view / delete-confirmed
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/products", get(index))
        .route("/products/new", get(new_form).post(create))
        .route("/products/{id}", get(detail))
        .route("/products/{id}/edit", get(edit_form).post(edit))
        .route("/products/{id}/delete", get(delete_confirm).post(destroy))
        .with_state(state)
        .merge(health_routes())
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "stockroom"
    }))
}
