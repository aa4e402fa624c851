//! Typed error handling for request processing
//!
//! The catalog only has two domain error conditions: a missing product and an
//! invalid form submission. Invalid forms are handled in the handlers by
//! redisplaying the form, so `AppError` covers the not-found path plus the
//! ambient failures (storage, template rendering) that map to a 500.
//!
//! Each error knows its HTTP status code and a stable error code, and renders
//! as a minimal HTML error page since every route serves HTML.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::fmt;

/// The main error type for request handling
#[derive(Debug)]
pub enum AppError {
    /// A requested product identifier has no corresponding record
    ProductNotFound { id: i64 },

    /// The storage backend failed
    Storage { message: String },

    /// A view template failed to render
    Render { message: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ProductNotFound { id } => {
                write!(f, "product with id '{}' not found", id)
            }
            AppError::Storage { message } => {
                write!(f, "storage error: {}", message)
            }
            AppError::Render { message } => {
                write!(f, "failed to render view: {}", message)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ProductNotFound { .. } => "PRODUCT_NOT_FOUND",
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Render { .. } => "RENDER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Self-contained page: rendering an error must not depend on the
        // template engine that may itself have failed.
        let body = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{status}</title></head>\n\
             <body>\n<h1>{status}</h1>\n<p>{message}</p>\n\
             <p><a href=\"/products\">Back to products</a></p>\n</body>\n</html>\n",
            status = status,
            message = self,
        );

        (status, Html(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Render {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for request handling
pub type AppResult<T> = Result<T, AppError>;
