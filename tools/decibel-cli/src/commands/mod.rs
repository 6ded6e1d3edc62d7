//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;

pub use cart::CartArgs;
pub use catalog::CatalogArgs;
pub use checkout::CheckoutArgs;
pub use content::ContentArgs;
