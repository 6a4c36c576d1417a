//! Cart commands.
//!
//! Each command works on an already-opened store; `main` owns opening and
//! closing it.

#![allow(clippy::print_stdout)]

use std::fmt::Write as _;
use std::path::Path;

use barco_core::{CurrencyCode, Price, ProductId, Quantity};
use barco_storefront::cart::{CartLineItem, CartStore};
use barco_storefront::catalog::Product;
use barco_storefront::storage::SlotStore;
use barco_storefront::view::{CartView, ConfirmationView};
use tracing::{info, warn};

/// Print every line, then the item count and subtotal.
pub fn show<S: SlotStore>(cart: &CartStore<S>, currency: CurrencyCode) {
    print!("{}", render_cart(&CartView::from_store(cart, currency)));
}

/// Print the badge count.
pub fn count<S: SlotStore>(cart: &CartStore<S>) {
    println!("{}", cart.total_items());
}

/// Print the total price.
pub fn total<S: SlotStore>(cart: &CartStore<S>, currency: CurrencyCode) {
    println!("{}", Price::new(cart.total_price(), currency));
}

/// Add a line and print the confirmation.
pub fn add<S: SlotStore>(cart: &mut CartStore<S>, item: CartLineItem) {
    cart.add_to_cart(item);

    if let Some(confirmation) = ConfirmationView::from_store(cart) {
        print!("{}", render_confirmation(&confirmation));
    }
    cart.notification_mut().dismiss();
}

/// Add a product read from a JSON record.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a product record.
pub fn add_product<S: SlotStore>(
    cart: &mut CartStore<S>,
    path: &Path,
    quantity: Quantity,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let product: Product = serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid product record in {}: {e}", path.display()))?;

    if !product.is_available() {
        warn!(product = %product.name, "Adding a product marked unavailable");
    }

    info!(product = %product.name, %quantity, "Adding product from record");
    add(cart, product.to_line_item(quantity));
    Ok(())
}

pub fn remove<S: SlotStore>(cart: &mut CartStore<S>, id: &ProductId) {
    if cart.get(id).is_none() {
        println!("No line for {id}");
        return;
    }
    cart.remove_from_cart(id);
    println!("Removed {id}");
}

pub fn set_quantity<S: SlotStore>(cart: &mut CartStore<S>, id: &ProductId, quantity: u32) {
    if cart.get(id).is_none() {
        println!("No line for {id}");
        return;
    }
    cart.update_quantity(id, quantity);
    match cart.get(id) {
        Some(line) => println!("{id}: {}", line.quantity),
        None => println!("Removed {id}"),
    }
}

pub fn clear<S: SlotStore>(cart: &mut CartStore<S>) {
    cart.clear_cart();
    println!("Cart cleared");
}

fn render_cart(view: &CartView) -> String {
    if view.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in &view.items {
        let _ = write!(
            out,
            "{} x {} @ {} = {}",
            item.quantity, item.title, item.price, item.line_price
        );
        if let Some(href) = &item.href {
            let _ = write!(out, "  ({href})");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Items: {}  Subtotal: {}", view.item_count, view.subtotal);
    out
}

fn render_confirmation(confirmation: &ConfirmationView) -> String {
    format!(
        "Added to cart: {}\nItems in cart: {}\n",
        confirmation.product_name, confirmation.cart_item_count
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use barco_core::Slug;
    use barco_storefront::cart::CartPersistence;
    use barco_storefront::storage::MemoryStore;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_render_empty_cart() {
        assert_eq!(render_cart(&CartView::empty(CurrencyCode::UAH)), "Cart is empty\n");
    }

    #[test]
    fn test_render_cart_lines() {
        let mut cart = CartStore::open(CartPersistence::new(MemoryStore::new()));
        cart.add_to_cart(
            CartLineItem::new(
                "Oak Table",
                "Oak Table",
                Decimal::new(1000, 0),
                "/table.jpg",
                Quantity::new(2).unwrap(),
            )
            .with_slug(Slug::new("oak-table")),
        );

        let rendered = render_cart(&CartView::from_store(&cart, CurrencyCode::UAH));
        assert_eq!(
            rendered,
            "2 x Oak Table @ ₴1000.00 = ₴2000.00  (/productDetails/oak-table)\n\
             Items: 2  Subtotal: ₴2000.00\n"
        );
    }

    #[test]
    fn test_add_dismisses_after_printing() {
        let mut cart = CartStore::open(CartPersistence::new(MemoryStore::new()));
        add(
            &mut cart,
            CartLineItem::new("Lamp", "Lamp", Decimal::new(5, 0), "/lamp.jpg", Quantity::ONE),
        );

        assert!(!cart.notification().is_visible());
        assert_eq!(cart.notification().last_added().map(|i| i.name.as_str()), Some("Lamp"));
    }

    #[test]
    fn test_render_confirmation() {
        let confirmation = ConfirmationView {
            product_name: "Lamp".to_string(),
            cart_item_count: 4,
        };
        assert_eq!(
            render_confirmation(&confirmation),
            "Added to cart: Lamp\nItems in cart: 4\n"
        );
    }
}
