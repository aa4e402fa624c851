//! Field validators for the product form
//!
//! These are plugged into the `validator` derive on `ProductForm` and kept
//! here so handlers and tests can reuse them directly.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Validator: name must contain at least one non-whitespace character.
pub fn name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(field_error("not_blank", "name must not be blank"))
    } else {
        Ok(())
    }
}

/// Validator: price must parse as a non-negative decimal.
pub fn price_format(price: &str) -> Result<(), ValidationError> {
    match price.trim().parse::<Decimal>() {
        Ok(value) if value < Decimal::ZERO => {
            Err(field_error("negative", "price must not be negative"))
        }
        Ok(_) => Ok(()),
        Err(_) => Err(field_error("format", "price must be a decimal number")),
    }
}

/// Flatten `ValidationErrors` into a field → messages map for view rendering.
///
/// The map is ordered so error listings render deterministically. Errors
/// without an explicit message fall back to their code.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}
