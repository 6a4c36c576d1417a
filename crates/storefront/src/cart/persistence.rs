//! Write-through persistence of the cart collection.
//!
//! The whole collection is stored as a bare JSON array of [`CartLineItem`]
//! records in a single slot. There is no envelope, version field or
//! migration: a snapshot that does not parse is discarded.

use crate::cart::CartLineItem;
use crate::error::CartError;
use crate::storage::SlotStore;

/// Slot name the cart is stored under unless configured otherwise.
pub const DEFAULT_SLOT_KEY: &str = "cart";

/// Binds a slot store to the cart's slot key and owns the snapshot encoding.
#[derive(Debug, Clone)]
pub struct CartPersistence<S> {
    store: S,
    key: String,
}

impl<S: SlotStore> CartPersistence<S> {
    /// Persist under [`DEFAULT_SLOT_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SLOT_KEY)
    }

    /// Persist under a custom slot key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Slot key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying slot store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying slot store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the saved collection.
    ///
    /// Never fails: an empty slot, an unreadable slot and a malformed snapshot
    /// all yield an empty cart. The latter two are logged.
    ///
    /// Lines repeating an earlier product ID are folded into that line the
    /// same way `add_to_cart` merges: quantities are summed and the first
    /// line's other fields are kept.
    #[must_use]
    pub fn load(&self) -> Vec<CartLineItem> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = %self.key, "No saved cart");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(slot = %self.key, error = %e, "Failed to read saved cart");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
            Ok(items) => self.fold_duplicates(items),
            Err(e) => {
                tracing::warn!(slot = %self.key, error = %e, "Discarding malformed saved cart");
                Vec::new()
            }
        }
    }

    fn fold_duplicates(&self, items: Vec<CartLineItem>) -> Vec<CartLineItem> {
        let saved = items.len();
        let mut folded: Vec<CartLineItem> = Vec::with_capacity(saved);

        for item in items {
            match folded.iter_mut().find(|line| line.id == item.id) {
                Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
                None => folded.push(item),
            }
        }

        if folded.len() != saved {
            tracing::warn!(
                slot = %self.key,
                saved,
                kept = folded.len(),
                "Folded duplicate lines in saved cart"
            );
        }
        folded
    }

    /// Overwrite the slot with a full snapshot of `items`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Serialize` if encoding fails and
    /// `CartError::Storage` if the slot cannot be written.
    pub fn save(&self, items: &[CartLineItem]) -> Result<(), CartError> {
        let snapshot = serde_json::to_string(items)?;
        self.store.write(&self.key, &snapshot)?;
        Ok(())
    }
}
