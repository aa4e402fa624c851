//! HTTP handlers for the catalog views
//!
//! Handlers perform only null-checks, validation checks, and view/redirect
//! selection; everything else is delegated to the `CatalogService`. A missing
//! identifier is a 404, an invalid form submission redisplays the form with
//! the submitted values and a 422 status, and every successful mutation
//! redirects to the listing.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tera::Context;
use validator::ValidationErrors;

use crate::core::error::{AppError, AppResult};
use crate::core::product::ProductForm;
use crate::core::service::CatalogService;
use crate::core::validation::field_errors;
use crate::web::views::Views;

/// Shared state for all catalog handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CatalogService,
    pub views: Views,
}

/// GET / — the listing is the landing page
pub async fn root() -> Redirect {
    Redirect::to("/products")
}

/// GET /products — listing view
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = state.service.list_products().await?;

    let mut ctx = Context::new();
    ctx.insert("products", &products);
    state.views.render("products/index.html", &ctx)
}

/// GET /products/{id} — detail view
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let product = state
        .service
        .product(id)
        .await?
        .ok_or(AppError::ProductNotFound { id })?;

    let mut ctx = Context::new();
    ctx.insert("product", &product);
    state.views.render("products/detail.html", &ctx)
}

/// GET /products/new — empty create form
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, "New product", "/products/new", &ProductForm::default(), None)
}

/// POST /products/new — create, or redisplay the form on invalid input
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> AppResult<Response> {
    match form.to_draft() {
        Ok(draft) => {
            state.service.add_product(draft).await?;
            Ok(Redirect::to("/products").into_response())
        }
        Err(errors) => {
            let body = render_form(&state, "New product", "/products/new", &form, Some(&errors))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response())
        }
    }
}

/// GET /products/{id}/edit — form pre-filled from the record
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let product = state
        .service
        .product(id)
        .await?
        .ok_or(AppError::ProductNotFound { id })?;

    let form = ProductForm::from_product(&product);
    render_form(
        &state,
        "Edit product",
        &format!("/products/{}/edit", id),
        &form,
        None,
    )
}

/// POST /products/{id}/edit — full replace of name/price
///
/// A form id that disagrees with the path id is treated as not-found, the
/// same as editing a record that no longer exists.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> AppResult<Response> {
    if form.id.is_some_and(|form_id| form_id != id) {
        return Err(AppError::ProductNotFound { id });
    }

    match form.to_draft() {
        Ok(draft) => match state.service.update_product(id, draft).await? {
            Some(_) => Ok(Redirect::to("/products").into_response()),
            None => Err(AppError::ProductNotFound { id }),
        },
        Err(errors) => {
            let body = render_form(
                &state,
                "Edit product",
                &format!("/products/{}/edit", id),
                &form,
                Some(&errors),
            )?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response())
        }
    }
}

/// GET /products/{id}/delete — confirmation view
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let product = state
        .service
        .product(id)
        .await?
        .ok_or(AppError::ProductNotFound { id })?;

    let mut ctx = Context::new();
    ctx.insert("product", &product);
    state.views.render("products/delete.html", &ctx)
}

/// POST /products/{id}/delete — delete-confirmed
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    if state.service.remove_product(id).await? {
        Ok(Redirect::to("/products").into_response())
    } else {
        Err(AppError::ProductNotFound { id })
    }
}

/// Render the shared create/edit form template.
fn render_form(
    state: &AppState,
    title: &str,
    action: &str,
    form: &ProductForm,
    errors: Option<&ValidationErrors>,
) -> AppResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx.insert("action", action);
    ctx.insert("form", form);
    ctx.insert(
        "errors",
        &errors.map(field_errors).unwrap_or_default(),
    );
    state.views.render("products/form.html", &ctx)
}
