//! Product identity types.
//!
//! Catalog records are keyed by strings coming from the CMS, so unlike
//! database-backed entities these IDs wrap a `String` rather than an integer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a purchasable product.
///
/// The same product always maps to the same ID within a session, which is
/// what lets the cart merge repeated adds into one line.
///
/// # Example
///
/// ```rust
/// use barco_core::ProductId;
///
/// let id = ProductId::new("Oak Dresser");
/// assert_eq!(id.as_str(), "Oak Dresser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// URL slug of a product detail page, in the CMS object shape
/// (`{"current": "oak-dresser"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    /// Create a new slug.
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    /// Path of the product detail page this slug points to.
    #[must_use]
    pub fn product_path(&self) -> String {
        format!("/productDetails/{}", self.current)
    }
}
