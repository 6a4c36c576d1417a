//! Add-to-cart confirmation state.
//!
//! Decouples "an item was just added" from whatever surface shows the
//! confirmation. Only [`CartStore::add_to_cart`](crate::cart::CartStore::add_to_cart)
//! makes it visible; consumers dismiss it.

use crate::cart::CartLineItem;

/// Observable state of the confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState<'a> {
    Hidden,
    Visible(&'a CartLineItem),
}

/// Visibility flag plus a snapshot of the most recently added item.
///
/// The payload is an owned copy taken at add time, so later changes to the
/// cart line do not alter a confirmation that is already on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    visible: bool,
    last_added: Option<CartLineItem>,
}

impl Notification {
    /// A hidden notification with no payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state. Visible only when the flag is set and a payload exists.
    #[must_use]
    pub fn state(&self) -> NotificationState<'_> {
        match (&self.last_added, self.visible) {
            (Some(item), true) => NotificationState::Visible(item),
            _ => NotificationState::Hidden,
        }
    }

    /// Raw visibility flag. Use [`state`](Self::state) to get the payload
    /// along with it.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Snapshot of the last added item, kept after dismissal.
    #[must_use]
    pub const fn last_added(&self) -> Option<&CartLineItem> {
        self.last_added.as_ref()
    }

    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_last_added(&mut self, item: Option<CartLineItem>) {
        self.last_added = item;
    }

    /// Hide the confirmation. The payload is retained.
    pub const fn dismiss(&mut self) {
        self.visible = false;
    }

    pub(crate) fn show(&mut self, item: CartLineItem) {
        self.last_added = Some(item);
        self.visible = true;
    }
}
