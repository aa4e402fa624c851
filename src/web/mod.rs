//! Server-rendered HTML exposure
//!
//! This module owns everything HTTP-facing: the route table, the handlers,
//! and the Tera view environment. It is isolated from the core so the
//! catalog logic stays transport-agnostic.

pub mod handlers;
pub mod router;
pub mod views;

pub use handlers::AppState;
pub use router::build_routes;
pub use views::Views;
