//! Tera view environment for the server-rendered pages
//!
//! Templates are embedded at compile time so the binary and the test suites
//! need no template directory on disk.

use axum::response::Html;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::core::error::AppResult;

/// Shared template environment.
///
/// Cheap to clone; the parsed templates live behind an `Arc`.
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    /// Parse the embedded templates into a fresh environment.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("../../templates/layout.html")),
            (
                "products/index.html",
                include_str!("../../templates/products/index.html"),
            ),
            (
                "products/detail.html",
                include_str!("../../templates/products/detail.html"),
            ),
            (
                "products/form.html",
                include_str!("../../templates/products/form.html"),
            ),
            (
                "products/delete.html",
                include_str!("../../templates/products/delete.html"),
            ),
        ])?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template to an HTML response body.
    pub fn render(&self, template: &str, context: &Context) -> AppResult<Html<String>> {
        Ok(Html(self.tera.render(template, context)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_parse() {
        Views::new().expect("embedded templates should parse");
    }

    #[test]
    fn test_index_renders_with_empty_listing() {
        let views = Views::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("products", &Vec::<crate::core::product::Product>::new());

        let html = views.render("products/index.html", &ctx).unwrap();
        assert!(html.0.contains("Products"));
    }

    #[test]
    fn test_missing_template_is_a_render_error() {
        let views = Views::new().unwrap();
        let result = views.render("nope.html", &Context::new());
        assert!(result.is_err());
    }
}
