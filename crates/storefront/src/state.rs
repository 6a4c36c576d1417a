//! Cart context shared across consumers.

use std::sync::{Arc, RwLock};

use crate::cart::{CartPersistence, CartStore};
use crate::error::CartError;
use crate::storage::SlotStore;

/// Handle to the one cart of the session.
///
/// Constructed once at startup and cloned into every consumer (badge, line
/// list, confirmation). Clones share the same store, so a mutation made
/// through one handle is seen by all the others on their next read.
pub struct CartContext<S: SlotStore> {
    inner: Arc<RwLock<CartStore<S>>>,
}

impl<S: SlotStore> Clone for CartContext<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SlotStore> CartContext<S> {
    /// Hydrate the cart and wrap it for sharing.
    #[must_use]
    pub fn open(persistence: CartPersistence<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CartStore::open(persistence))),
        }
    }

    /// Run `f` against the store for reading.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LockPoisoned` if a previous update panicked.
    pub fn read<T>(&self, f: impl FnOnce(&CartStore<S>) -> T) -> Result<T, CartError> {
        let store = self.inner.read().map_err(|_| CartError::LockPoisoned)?;
        Ok(f(&store))
    }

    /// Run `f` against the store for mutation.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LockPoisoned` if a previous update panicked.
    pub fn update<T>(&self, f: impl FnOnce(&mut CartStore<S>) -> T) -> Result<T, CartError> {
        let mut store = self.inner.write().map_err(|_| CartError::LockPoisoned)?;
        Ok(f(&mut store))
    }

    /// Flush the cart before the session ends.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the lock is poisoned or the write fails.
    pub fn shutdown(&self) -> Result<(), CartError> {
        self.update(CartStore::flush)??;
        tracing::info!("Cart flushed on shutdown");
        Ok(())
    }
}
