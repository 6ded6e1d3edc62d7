//! Order-summary math.

use crate::cart::Cart;
use crate::money::Money;

/// VAT rate applied to the product subtotal.
pub const VAT_RATE: f64 = 20.0;

/// Flat shipping charge per order.
pub const SHIPPING_FLAT: Money = Money::from_cents(50_00);

/// The price breakdown shown before an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// 20% of the subtotal, rounded to the nearest cent.
    pub vat: Money,
    /// Flat shipping charge.
    pub shipping: Money,
    /// Subtotal plus VAT plus shipping.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Compute the summary for the current cart state.
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let vat = subtotal.percentage(VAT_RATE);
        let shipping = SHIPPING_FLAT;
        Self {
            subtotal,
            vat,
            shipping,
            grand_total: subtotal.saturating_add(vat).saturating_add(shipping),
        }
    }
}
