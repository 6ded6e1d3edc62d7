//! Storefront domain logic for Decibel.
//!
//! This crate provides the state engines behind a small hi-fi audio
//! storefront:
//!
//! - **Cart**: a pure reducer over cart line items with derived totals,
//!   plus a storage-backed session that persists after every mutation
//! - **Catalog**: products, the embedded base catalog, and the
//!   base-plus-overrides merge
//! - **Content**: editable site content (hero, about, categories,
//!   featured products) and the product/image CRUD store
//! - **Checkout**: order form validation and order-summary math
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use decibel_commerce::prelude::*;
//! use decibel_kv::MemoryStore;
//!
//! let storage = Arc::new(MemoryStore::new());
//! let notifier = Arc::new(NullNotifier);
//!
//! let store = ContentStore::hydrate(storage.clone(), notifier.clone());
//! let mut session = CartSession::hydrate(storage, notifier);
//!
//! let product = store.product_by_slug("zx9-speaker").unwrap();
//! session.add_item(product.line_item(2));
//!
//! let summary = OrderSummary::for_cart(session.cart());
//! println!("Total: {}", summary.grand_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;

pub use error::CommerceError;
pub use ids::{CategoryId, ProductId};
pub use money::Money;
pub use notify::{Notifier, Severity};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::money::Money;
    pub use crate::notify::{MemoryNotifier, Notifier, NullNotifier, Severity};

    // Cart
    pub use crate::cart::{Cart, CartCommand, CartSession, LineItem};

    // Catalog
    pub use crate::catalog::{
        base_catalog, merge_catalog, override_subset, Gallery, ImageSet, IncludedItem, Product,
        ProductCategory, RelatedProduct,
    };

    // Content
    pub use crate::content::{
        AboutSection, ContentCategory, ContentStore, FeaturedProduct, HeroSection, SectionUpdate,
        SiteContent, UploadedImage,
    };

    // Checkout
    pub use crate::checkout::{CheckoutForm, FieldError, OrderSummary, PaymentMethod};
}
