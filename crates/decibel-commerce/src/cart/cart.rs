//! Cart state and its transitions.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the cart: one product with an associated quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identity; unique within a cart.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price captured when the line was created.
    pub price: Money,
    /// Quantity; always >= 1 inside a cart.
    pub quantity: u32,
    /// Thumbnail URI.
    pub image: String,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity,
            image: image.into(),
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// A cart transition command.
///
/// Every mutation the cart supports, as data; useful for driving the
/// reducer from an event source. The named methods on [`Cart`] are the
/// same transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartCommand {
    /// Add an item, merging quantities if the product is already present.
    Add(LineItem),
    /// Remove the line with this product id, if present.
    Remove(ProductId),
    /// Replace a line's quantity; 0 removes the line.
    SetQuantity {
        product_id: ProductId,
        quantity: u32,
    },
    /// Empty the cart.
    Clear,
    /// Wholesale-replace the items (startup hydration).
    Load(Vec<LineItem>),
}

/// The shopping cart.
///
/// Items stay in insertion order. The derived values — [`Cart::total`]
/// and [`Cart::item_count`] — are computed from the items on every read,
/// never stored, so they cannot drift. Every transition is total: no
/// command returns an error or panics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Get a line by product id.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same product id exists, only its quantity grows;
    /// the existing price, name, and image are retained so a stale add
    /// cannot silently re-price an already-added line. An add with
    /// quantity 0 changes nothing.
    pub fn add_item(&mut self, item: LineItem) {
        if item.quantity == 0 {
            return;
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Remove the line with this product id. Returns whether a line was
    /// removed; removing an absent id is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Replace a line's quantity. A quantity of 0 removes the line.
    /// Returns whether a line was affected; an absent id is a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Wholesale-replace the items. Used once at startup hydration.
    pub fn load(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    /// Apply a [`CartCommand`]; equivalent to calling the named method.
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add(item) => self.add_item(item),
            CartCommand::Remove(product_id) => {
                self.remove_item(product_id);
            }
            CartCommand::SetQuantity {
                product_id,
                quantity,
            } => {
                self.set_quantity(product_id, quantity);
            }
            CartCommand::Clear => self.clear(),
            CartCommand::Load(items) => self.load(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price_cents: i64, quantity: u32) -> LineItem {
        LineItem::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::from_cents(price_cents),
            quantity,
            format!("/assets/product-{id}.jpg"),
        )
    }

    fn assert_invariants(cart: &Cart) {
        let expected_total: i64 = cart
            .items()
            .iter()
            .map(|i| i.price.cents() * i64::from(i.quantity))
            .sum();
        let expected_count: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total().cents(), expected_total);
        assert_eq!(cart.item_count(), expected_count);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 2));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().cents(), 2000);
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_same_product_merges_quantities() {
        let mut cart = Cart::new();
        cart.add_item(item(5, 100_00, 1));
        cart.add_item(item(5, 100_00, 2));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_invariants(&cart);
    }

    #[test]
    fn test_re_add_keeps_original_price() {
        let mut cart = Cart::new();
        cart.add_item(item(5, 100_00, 2));
        // a stale add carrying a different price must not re-price the line
        cart.add_item(item(5, 999_00, 1));

        let line = cart.get_item(ProductId::new(5)).unwrap();
        assert_eq!(line.price.cents(), 100_00);
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.total().cents(), 300_00);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 0));
        assert!(cart.is_empty());

        cart.add_item(item(1, 1000, 2));
        cart.add_item(item(1, 1000, 0));
        assert_eq!(cart.item_count(), 2);
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));
        cart.add_item(item(2, 2000, 1));

        assert!(cart.remove_item(ProductId::new(1)));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total().cents(), 2000);
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));
        assert!(!cart.remove_item(ProductId::new(99)));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));

        assert!(cart.set_quantity(ProductId::new(1), 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().cents(), 5000);
        assert_invariants(&cart);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 3));

        assert!(cart.set_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());
        assert_invariants(&cart);
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ProductId::new(1), 5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 2));
        cart.add_item(item(2, 2000, 1));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_load_replaces_and_recomputes() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));

        cart.load(vec![item(2, 2500, 2), item(3, 100, 4)]);
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.total().cents(), 5400);
        assert_eq!(cart.item_count(), 6);
        assert_invariants(&cart);
    }

    #[test]
    fn test_apply_matches_named_methods() {
        let commands = vec![
            CartCommand::Add(item(1, 1000, 2)),
            CartCommand::Add(item(2, 500, 1)),
            CartCommand::SetQuantity {
                product_id: ProductId::new(1),
                quantity: 4,
            },
            CartCommand::Remove(ProductId::new(2)),
            CartCommand::Add(item(3, 250, 2)),
        ];

        let mut by_apply = Cart::new();
        for command in commands {
            by_apply.apply(command);
            assert_invariants(&by_apply);
        }

        let mut by_methods = Cart::new();
        by_methods.add_item(item(1, 1000, 2));
        by_methods.add_item(item(2, 500, 1));
        by_methods.set_quantity(ProductId::new(1), 4);
        by_methods.remove_item(ProductId::new(2));
        by_methods.add_item(item(3, 250, 2));

        assert_eq!(by_apply, by_methods);
    }

    #[test]
    fn test_serializes_as_plain_item_list() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 2));

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
