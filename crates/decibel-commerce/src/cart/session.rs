//! Storage-backed cart session.

use std::collections::HashSet;
use std::sync::Arc;

use decibel_kv::{Storage, StorageExt};

use crate::cart::{Cart, CartCommand, LineItem};
use crate::ids::ProductId;
use crate::notify::{Notifier, Severity};

/// Durable storage key for the cart line items.
pub const CART_KEY: &str = "cart";

/// A cart bound to durable storage.
///
/// Hydrates once at construction and writes the line-item list back after
/// every mutation. The derived totals are never persisted; they are
/// recomputed from the items, so a hand-edited blob cannot make them
/// drift.
pub struct CartSession {
    cart: Cart,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
}

impl CartSession {
    /// Load the saved cart, falling back to empty.
    ///
    /// A missing blob is a fresh session; an unparseable or structurally
    /// invalid blob (duplicate ids, zero quantities, negative prices) is
    /// treated the same way, with a logged diagnostic. Hydration never
    /// fails.
    pub fn hydrate(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        let mut cart = Cart::new();
        match storage.get::<Vec<LineItem>>(CART_KEY) {
            Ok(Some(items)) => {
                if items_are_well_formed(&items) {
                    cart.load(items);
                } else {
                    tracing::warn!("saved cart is structurally invalid, starting empty");
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved cart, starting empty");
            }
        }
        Self {
            cart,
            storage,
            notifier,
        }
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add an item and persist.
    pub fn add_item(&mut self, item: LineItem) {
        self.cart.add_item(item);
        self.persist();
    }

    /// Remove a line and persist. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        self.persist();
        removed
    }

    /// Replace a line's quantity (0 removes) and persist.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        let affected = self.cart.set_quantity(product_id, quantity);
        self.persist();
        affected
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Apply a [`CartCommand`] and persist.
    pub fn apply(&mut self, command: CartCommand) {
        self.cart.apply(command);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.storage.set(CART_KEY, &self.cart.items()) {
            tracing::warn!(error = %e, "failed to persist cart");
            self.notifier.notify(
                Severity::Warning,
                "Your cart could not be saved; changes will be lost when you leave.",
            );
        }
    }
}

/// Structural validity for a persisted item list: unique product ids,
/// quantities >= 1, prices >= 0.
fn items_are_well_formed(items: &[LineItem]) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if item.quantity == 0 || item.price.is_negative() {
            return false;
        }
        if !seen.insert(item.product_id) {
            return false;
        }
    }
    true
}
