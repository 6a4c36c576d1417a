//! Client-side shopping cart.
//!
//! The cart is a local, single-session store of what the shopper intends to
//! buy. It is made of three pieces:
//!
//! - [`CartStore`] - line items, mutations and derived totals
//! - [`CartPersistence`] - full-snapshot write-through to a [`SlotStore`](crate::storage::SlotStore)
//! - [`Notification`] - the "item added" confirmation state
//!
//! # Data flow
//!
//! ```text
//! UI action -> CartStore mutation -> CartPersistence::save -> Notification
//!                                                          -> badge / list re-render
//! ```

mod item;
mod notification;
mod persistence;
mod store;

pub use item::CartLineItem;
pub use notification::{Notification, NotificationState};
pub use persistence::{CartPersistence, DEFAULT_SLOT_KEY};
pub use store::CartStore;
