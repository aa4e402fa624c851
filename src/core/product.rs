//! The Product entity and its write payloads
//!
//! `Product` is the persisted record. `ProductForm` is the raw, string-typed
//! form submission (kept as submitted so an invalid form can be redisplayed
//! verbatim), and `ProductDraft` is the validated payload the store accepts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::validation::{name_not_blank, price_format};

/// A catalog product.
///
/// - `id` is assigned by the store and immutable once persisted
/// - `name` is required and non-blank
/// - `price` is a non-negative decimal currency value
/// - timestamps are managed by the store on insert/update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated write payload for creating or replacing a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
}

/// Raw form submission for the create and edit views.
///
/// Fields stay string-typed so a failed validation can redisplay exactly what
/// the user typed. `id` is only present on edit submissions and must match the
/// path parameter.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    pub id: Option<i64>,

    #[validate(custom(function = name_not_blank))]
    pub name: String,

    #[validate(custom(function = price_format))]
    pub price: String,
}

impl ProductForm {
    /// Build a form pre-filled from an existing product (edit view).
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }

    /// Validate the submission and convert it into a `ProductDraft`.
    ///
    /// On failure the caller still holds the form and can redisplay it.
    pub fn to_draft(&self) -> Result<ProductDraft, ValidationErrors> {
        self.validate()?;

        let price = self.price.trim().parse::<Decimal>().map_err(|_| {
            // Unreachable after validate(); kept as a hard error rather than
            // a panic in case the rules and the parse ever diverge.
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("format");
            err.message = Some("price must be a decimal number".into());
            errors.add("price", err);
            errors
        })?;

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            price,
        })
    }
}
