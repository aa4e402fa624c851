//! Shared test harness for storage backend testing
//!
//! Provides draft/product helpers and the `product_store_tests!` macro, which
//! generates a `ProductStore` conformance suite for any backend.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod product_store_tests;

use rust_decimal::Decimal;
use stockroom::core::product::ProductDraft;

/// Build a draft with a parsed decimal price.
pub fn draft(name: &str, price: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: price.parse().expect("test price must parse"),
    }
}

/// Parse a decimal literal for assertions.
pub fn dec(value: &str) -> Decimal {
    value.parse().expect("test decimal must parse")
}
