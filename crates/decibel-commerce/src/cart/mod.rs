//! Shopping cart module.
//!
//! `Cart` is the pure state: line items plus derived totals. `CartSession`
//! wraps it with hydration from durable storage and persist-after-every-
//! mutation semantics.

mod cart;
mod session;

pub use cart::{Cart, CartCommand, LineItem};
pub use session::{CartSession, CART_KEY};
