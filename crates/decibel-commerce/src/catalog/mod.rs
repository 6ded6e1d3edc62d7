//! Product catalog module.
//!
//! Products, the embedded base catalog, and the merge of base plus
//! durable overrides.

mod base;
mod merge;
mod product;

pub use base::base_catalog;
pub use merge::{merge_catalog, next_product_id, override_subset};
pub use product::{Gallery, ImageSet, IncludedItem, Product, ProductCategory, RelatedProduct};
