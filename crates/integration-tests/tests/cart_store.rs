//! Integration tests for cart store behavior.
//!
//! These tests drive the store only through its public API and check the
//! merge rules, totals and confirmation state.

use std::collections::{HashMap, HashSet};

use barco_core::ProductId;
use barco_integration_tests::line;
use barco_storefront::cart::{CartPersistence, CartStore, NotificationState};
use barco_storefront::storage::MemoryStore;
use barco_storefront::view::ConfirmationView;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn open() -> CartStore<MemoryStore> {
    CartStore::open(CartPersistence::new(MemoryStore::new()))
}

fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_repeated_add_keeps_first_price() {
    let mut cart = open();
    cart.add_to_cart(line("A", 10, 1));
    cart.add_to_cart(line("A", 99, 2));

    let entry = cart.get(&id("A")).expect("line A present");
    assert_eq!(entry.price, Decimal::new(10, 0));
    assert_eq!(entry.quantity.get(), 3);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Decimal::new(30, 0));
}

#[test]
fn test_update_quantity_sets_absolute_value() {
    let mut cart = open();
    cart.add_to_cart(line("B", 5, 1));
    cart.update_quantity(&id("B"), 4);

    assert_eq!(cart.get(&id("B")).expect("line B present").quantity.get(), 4);
    assert_eq!(cart.total_price(), Decimal::new(20, 0));
}

#[test]
fn test_remove_twice_is_noop() {
    let mut cart = open();
    cart.add_to_cart(line("A", 10, 1));
    cart.remove_from_cart(&id("A"));
    cart.remove_from_cart(&id("A"));

    assert!(cart.is_empty());
}

#[test]
fn test_clear_zeroes_totals() {
    let mut cart = open();
    cart.add_to_cart(line("A", 10, 2));
    cart.add_to_cart(line("B", 7, 5));
    cart.clear_cart();

    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Decimal::ZERO);
}

#[test]
fn test_unrelated_remove_keeps_confirmation() {
    let mut cart = open();
    cart.add_to_cart(line("B", 3, 1));
    cart.add_to_cart(line("A", 10, 1));
    cart.remove_from_cart(&id("B"));

    match cart.notification().state() {
        NotificationState::Visible(item) => assert_eq!(item.id, id("A")),
        NotificationState::Hidden => panic!("confirmation should still be visible"),
    }
}

#[test]
fn test_confirmation_payload_is_a_snapshot() {
    let mut cart = open();
    cart.add_to_cart(line("A", 10, 1));
    cart.update_quantity(&id("A"), 12);

    let shown = cart.notification().last_added().expect("payload present");
    assert_eq!(shown.quantity.get(), 1);

    let confirmation = ConfirmationView::from_store(&cart).expect("visible");
    assert_eq!(confirmation.product_name, "A (furniture)");
    assert_eq!(confirmation.cart_item_count, 12);
}

#[test]
fn test_dismissed_confirmation_reappears_on_next_add() {
    let mut cart = open();
    cart.add_to_cart(line("A", 10, 1));
    cart.notification_mut().dismiss();
    assert!(!cart.notification().is_visible());

    cart.add_to_cart(line("B", 4, 1));
    assert!(cart.notification().is_visible());
    assert_eq!(
        cart.notification().last_added().map(|item| item.id.clone()),
        Some(id("B"))
    );
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add { id: u8, price: i64, quantity: u32 },
    Remove { id: u8 },
    Update { id: u8, quantity: u32 },
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..5, 0i64..5_000, 1u32..50)
            .prop_map(|(id, price, quantity)| Op::Add { id, price, quantity }),
        1 => (0u8..5).prop_map(|id| Op::Remove { id }),
        2 => (0u8..5, 0u32..50).prop_map(|(id, quantity)| Op::Update { id, quantity }),
        1 => Just(Op::Clear),
    ]
}

fn product(id: u8) -> ProductId {
    ProductId::new(format!("P{id}"))
}

proptest! {
    #[test]
    fn prop_adds_sum_quantities_and_keep_first_fields(
        adds in prop::collection::vec((0u8..4, 0i64..10_000, 1u32..100), 1..40)
    ) {
        let mut cart = open();
        let mut expected_qty: HashMap<u8, u64> = HashMap::new();
        let mut first_price: HashMap<u8, i64> = HashMap::new();

        for (pid, price, quantity) in &adds {
            cart.add_to_cart(line(product(*pid).as_str(), *price, *quantity));
            *expected_qty.entry(*pid).or_default() += u64::from(*quantity);
            first_price.entry(*pid).or_insert(*price);
        }

        prop_assert_eq!(cart.len(), expected_qty.len());
        for (pid, qty) in &expected_qty {
            let entry = cart.get(&product(*pid)).expect("line present");
            prop_assert_eq!(u64::from(entry.quantity.get()), *qty);
            prop_assert_eq!(entry.price, Decimal::new(first_price[pid], 0));
        }

        let expected_total: Decimal = expected_qty
            .iter()
            .map(|(pid, qty)| Decimal::new(first_price[pid], 0) * Decimal::from(*qty))
            .sum();
        prop_assert_eq!(cart.total_price(), expected_total);
        prop_assert_eq!(cart.total_items(), expected_qty.values().sum::<u64>());
    }

    #[test]
    fn prop_totals_match_lines_after_any_ops(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut cart = open();
        for op in ops {
            match op {
                Op::Add { id, price, quantity } => {
                    cart.add_to_cart(line(product(id).as_str(), price, quantity));
                }
                Op::Remove { id } => cart.remove_from_cart(&product(id)),
                Op::Update { id, quantity } => cart.update_quantity(&product(id), quantity),
                Op::Clear => cart.clear_cart(),
            }
        }

        let ids: HashSet<&ProductId> = cart.items().iter().map(|l| &l.id).collect();
        prop_assert_eq!(ids.len(), cart.len());
        prop_assert!(cart.items().iter().all(|l| l.quantity.get() >= 1));

        let sum_items: u64 = cart.items().iter().map(|l| u64::from(l.quantity.get())).sum();
        let sum_price: Decimal = cart
            .items()
            .iter()
            .map(|l| l.price * Decimal::from(l.quantity.get()))
            .sum();
        prop_assert_eq!(cart.total_items(), sum_items);
        prop_assert_eq!(cart.total_price(), sum_price);
    }
}
