//! Cart line item.

use barco_core::{ProductId, Quantity, Slug};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One distinct product in the cart, with the number of units.
///
/// This is also the persisted record shape: a JSON object with `id`, `name`,
/// `price` (a number), `image`, `quantity` and an optional `slug` object.
/// The price is captured when the item is added and never re-read from the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the store currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URL.
    pub image: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
}

impl CartLineItem {
    /// Create a line item without a slug.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            quantity,
            slug: None,
        }
    }

    /// Attach the product page slug.
    #[must_use]
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    /// Unit price times quantity, saturating instead of overflowing.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity.get()))
    }
}
