//! The cart store: single source of truth for cart contents.

use barco_core::{ProductId, Quantity};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::cart::{CartLineItem, CartPersistence, Notification};
use crate::error::{self, CartError};
use crate::storage::SlotStore;

/// Insertion-ordered collection of line items, unique by product ID.
///
/// Every mutation writes a full snapshot through the persistence adapter
/// before returning. A failed write does not roll the mutation back: it is
/// reported, and the store stays dirty until the next successful write.
#[derive(Debug)]
pub struct CartStore<S: SlotStore> {
    items: Vec<CartLineItem>,
    persistence: CartPersistence<S>,
    notification: Notification,
    unsaved: bool,
}

impl<S: SlotStore> CartStore<S> {
    /// Hydrate the cart from its slot and write the result back.
    ///
    /// A missing or malformed snapshot yields an empty cart, and the
    /// write-back replaces the bad snapshot with `[]`.
    #[instrument(skip_all, fields(slot = persistence.key()))]
    pub fn open(persistence: CartPersistence<S>) -> Self {
        let items = persistence.load();
        tracing::info!(lines = items.len(), "Cart hydrated");

        let mut store = Self {
            items,
            persistence,
            notification: Notification::new(),
            unsaved: false,
        };
        store.persist();
        store
    }

    /// Add an item, merging with an existing line for the same product.
    ///
    /// On a merge only the quantity changes; the name, price and image stored
    /// first are kept. The confirmation is shown with a snapshot of `item` as
    /// passed in.
    #[instrument(skip(self, item), fields(product_id = %item.id, quantity = %item.quantity))]
    pub fn add_to_cart(&mut self, item: CartLineItem) {
        error::add_breadcrumb(
            "cart",
            "Added item to cart",
            Some(&[("product_id", item.id.as_str())]),
        );

        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item.clone());
        }

        self.notification.show(item);
        self.persist();
    }

    /// Remove the line for `id`. Unknown IDs are ignored.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);

        if self.items.len() == before {
            tracing::debug!("No cart line to remove");
            return;
        }
        self.persist();
    }

    /// Set the quantity of the line for `id` (absolute, not additive).
    ///
    /// A quantity of 0 removes the line. Unknown IDs are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        let Ok(quantity) = Quantity::new(quantity) else {
            self.remove_from_cart(id);
            return;
        };

        match self.items.iter_mut().find(|line| &line.id == id) {
            Some(line) => line.quantity = quantity,
            None => {
                tracing::debug!("No cart line to update");
                return;
            }
        }
        self.persist();
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of unit price times quantity over all lines. Not rounded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.line_total()))
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add-to-cart confirmation state.
    #[must_use]
    pub const fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Mutable confirmation state, for consumers dismissing it.
    pub const fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }

    /// Whether the last write failed and memory is ahead of the slot.
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    #[must_use]
    pub const fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }

    /// Write the current snapshot, surfacing any failure to the caller.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the snapshot cannot be encoded or written.
    pub fn flush(&mut self) -> Result<(), CartError> {
        self.persistence.save(&self.items)?;
        self.unsaved = false;
        Ok(())
    }

    /// Flush and release the slot store.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the final flush fails.
    pub fn close(mut self) -> Result<S, CartError> {
        self.flush()?;
        tracing::debug!(slot = self.persistence.key(), "Cart closed");
        Ok(self.persistence.into_store())
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            self.unsaved = true;
            error::report_persist_failure(&e);
        }
    }
}
