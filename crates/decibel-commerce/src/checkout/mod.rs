//! Checkout module.
//!
//! Order form validation and the order-summary math shown before an
//! order is placed.

mod form;
mod summary;

pub use form::{CheckoutForm, FieldError, PaymentMethod};
pub use summary::{OrderSummary, SHIPPING_FLAT, VAT_RATE};
