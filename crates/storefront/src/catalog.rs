//! Product records as delivered by the content backend.
//!
//! The catalog itself is fetched elsewhere; this module only knows the record
//! shape and how a product page turns a record into a cart line.

use barco_core::{ProductId, Quantity, Slug};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLineItem;

/// Image shown for products without a usable image.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

/// A furniture product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Gallery images; the backend sends `null` when none were uploaded.
    #[serde(default)]
    pub image: Option<Vec<ProductImage>>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// One gallery image. The asset may be missing for unpublished uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
}

impl Product {
    /// Cart identity of the product. Product pages key lines by name.
    #[must_use]
    pub fn id(&self) -> ProductId {
        ProductId::new(self.name.as_str())
    }

    /// URL of the first image that has an asset, or the placeholder.
    #[must_use]
    pub fn primary_image_url(&self) -> &str {
        self.image
            .iter()
            .flatten()
            .filter_map(|img| img.asset.as_ref())
            .map(|asset| asset.url.as_str())
            .find(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Products are available unless the record says otherwise.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.is_available.unwrap_or(true)
    }

    /// Build the line item added from this product's page.
    ///
    /// The current price is copied; the cart never re-reads it.
    #[must_use]
    pub fn to_line_item(&self, quantity: Quantity) -> CartLineItem {
        let item = CartLineItem::new(
            self.id(),
            self.name.as_str(),
            self.price,
            self.primary_image_url(),
            quantity,
        );
        match &self.slug {
            Some(slug) => item.with_slug(slug.clone()),
            None => item,
        }
    }
}
