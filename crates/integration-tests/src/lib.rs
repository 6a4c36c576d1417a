//! Integration tests for the Barco storefront cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p barco-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - store behavior and totals through the public API
//! - `cart_persistence` - hydration and round trips through real slot stores
//!
//! This library holds the fixtures shared by the test binaries.

use barco_core::{Quantity, Slug};
use barco_storefront::cart::CartLineItem;
use rust_decimal::Decimal;

/// A line item with a whole-unit price and no slug.
///
/// # Panics
///
/// Panics if `quantity` is 0.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn line(id: &str, price: i64, quantity: u32) -> CartLineItem {
    CartLineItem::new(
        id,
        format!("{id} (furniture)"),
        Decimal::new(price, 0),
        format!("https://cdn.example.com/{id}.jpg"),
        Quantity::new(quantity).unwrap(),
    )
}

/// A line item carrying a product page slug.
///
/// # Panics
///
/// Panics if `quantity` is 0.
#[must_use]
pub fn line_with_slug(id: &str, price: i64, quantity: u32) -> CartLineItem {
    line(id, price, quantity).with_slug(Slug::new(id.to_lowercase()))
}
