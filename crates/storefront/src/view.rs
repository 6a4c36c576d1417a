//! Display data derived from the cart.
//!
//! Formatting lives here rather than in the store: totals stay exact
//! `Decimal`s there and are only rounded for display.

use barco_core::{CurrencyCode, Price};
use rust_decimal::Decimal;

use crate::cart::{CartLineItem, CartStore, NotificationState};
use crate::storage::SlotStore;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    /// Link to the product page, when the line carries a slug.
    pub href: Option<String>,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: ImageView,
}

/// Image display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::zero(currency).display(),
            item_count: 0,
        }
    }

    /// Build the view from the current store contents.
    #[must_use]
    pub fn from_store<S: SlotStore>(store: &CartStore<S>, currency: CurrencyCode) -> Self {
        Self {
            items: store
                .items()
                .iter()
                .map(|line| CartItemView::from_line(line, currency))
                .collect(),
            subtotal: format_price(store.total_price(), currency),
            item_count: store.total_items(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    #[must_use]
    pub fn from_line(line: &CartLineItem, currency: CurrencyCode) -> Self {
        Self {
            id: line.id.to_string(),
            href: line.slug.as_ref().map(barco_core::Slug::product_path),
            title: line.name.clone(),
            quantity: line.quantity.get(),
            price: format_price(line.price, currency),
            line_price: format_price(line.line_total(), currency),
            image: ImageView {
                url: line.image.clone(),
                alt: line.name.clone(),
            },
        }
    }
}

/// Content of the "added to cart" confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub product_name: String,
    /// Units in the whole cart, not just the added line.
    pub cart_item_count: u64,
}

impl ConfirmationView {
    /// The confirmation to show, or `None` while it is hidden.
    #[must_use]
    pub fn from_store<S: SlotStore>(store: &CartStore<S>) -> Option<Self> {
        match store.notification().state() {
            NotificationState::Visible(item) => Some(Self {
                product_name: item.name.clone(),
                cart_item_count: store.total_items(),
            }),
            NotificationState::Hidden => None,
        }
    }
}

fn format_price(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).display()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use barco_core::{Quantity, Slug};

    use super::*;
    use crate::cart::CartPersistence;
    use crate::storage::MemoryStore;

    fn open() -> CartStore<MemoryStore> {
        CartStore::open(CartPersistence::new(MemoryStore::new()))
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from_store(&open(), CurrencyCode::UAH);
        assert_eq!(view, CartView::empty(CurrencyCode::UAH));
        assert_eq!(view.subtotal, "₴0.00");
        assert!(view.is_empty());
    }

    #[test]
    fn test_view_formats_lines() {
        let mut cart = open();
        cart.add_to_cart(
            CartLineItem::new(
                "Oak Table",
                "Oak Table",
                Decimal::new(124_950, 2),
                "/table.jpg",
                Quantity::new(2).unwrap(),
            )
            .with_slug(Slug::new("oak-table")),
        );
        cart.add_to_cart(CartLineItem::new(
            "Chair",
            "Chair",
            Decimal::new(300, 0),
            "/chair.jpg",
            Quantity::ONE,
        ));

        let view = CartView::from_store(&cart, CurrencyCode::UAH);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "₴2799.00");

        let table = view.items.first().unwrap();
        assert_eq!(table.href.as_deref(), Some("/productDetails/oak-table"));
        assert_eq!(table.price, "₴1249.50");
        assert_eq!(table.line_price, "₴2499.00");
        assert_eq!(table.image.alt, "Oak Table");

        let chair = view.items.get(1).unwrap();
        assert!(chair.href.is_none());
    }

    #[test]
    fn test_confirmation_hidden_until_add() {
        let mut cart = open();
        assert!(ConfirmationView::from_store(&cart).is_none());

        cart.add_to_cart(CartLineItem::new(
            "Lamp",
            "Brass Lamp",
            Decimal::new(80, 0),
            "/lamp.jpg",
            Quantity::new(2).unwrap(),
        ));
        let confirmation = ConfirmationView::from_store(&cart).unwrap();
        assert_eq!(confirmation.product_name, "Brass Lamp");
        assert_eq!(confirmation.cart_item_count, 2);

        cart.notification_mut().dismiss();
        assert!(ConfirmationView::from_store(&cart).is_none());
    }
}
