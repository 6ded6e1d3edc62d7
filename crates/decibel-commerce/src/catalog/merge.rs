//! Base-plus-overrides catalog merge.
//!
//! The shipped base catalog is immutable; user edits live in a durable
//! override list. The live catalog is the merge of the two, and only the
//! override subset is ever written back.

use crate::catalog::Product;
use crate::ids::ProductId;

/// Overlay `overrides` onto `base` by product id.
///
/// For an id present in both, the override wins. Base order is preserved
/// for untouched entries; net-new overrides are appended at the end in
/// their own order. The result has exactly one entry per distinct id.
pub fn merge_catalog(base: &[Product], overrides: &[Product]) -> Vec<Product> {
    let mut merged: Vec<Product> = Vec::with_capacity(base.len() + overrides.len());
    for product in base {
        match overrides.iter().find(|o| o.id == product.id) {
            Some(replacement) => merged.push(replacement.clone()),
            None => merged.push(product.clone()),
        }
    }
    for product in overrides {
        if !base.iter().any(|b| b.id == product.id) {
            merged.push(product.clone());
        }
    }
    merged
}

/// The entries of `live` that differ from, or are absent in, `base`.
///
/// This is the write-side inverse of [`merge_catalog`]: persisting only
/// this subset and re-merging at hydration reproduces `live` (up to
/// base-entry deletions, which the override model cannot express).
/// Deep comparison against the base on every write is O(base x live);
/// fine at this catalog's scale.
pub fn override_subset(base: &[Product], live: &[Product]) -> Vec<Product> {
    live.iter()
        .filter(|product| {
            base.iter()
                .find(|b| b.id == product.id)
                .map_or(true, |b| b != *product)
        })
        .cloned()
        .collect()
}

/// Allocate the next product id: one past the largest id seen in either
/// list. Monotonic under the single-writer model, so never reuses an id
/// even after deletions.
pub fn next_product_id(base: &[Product], live: &[Product]) -> ProductId {
    let max = base
        .iter()
        .chain(live.iter())
        .map(|p| p.id.get())
        .max()
        .unwrap_or(0);
    ProductId::new(max + 1)
}
