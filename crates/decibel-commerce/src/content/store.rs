//! The content/product store.

use std::sync::Arc;

use decibel_kv::{Storage, StorageExt};
use serde::de::DeserializeOwned;

use crate::catalog::{
    base_catalog, merge_catalog, next_product_id, override_subset, Product, ProductCategory,
};
use crate::content::{ContentCategory, SectionUpdate, SiteContent, UploadedImage};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::notify::{Notifier, Severity};

/// Durable storage key for the full site content.
pub const CONTENT_KEY: &str = "content";
/// Durable storage key for the product override subset.
pub const PRODUCTS_KEY: &str = "products";
/// Durable storage key for uploaded image metadata.
pub const IMAGES_KEY: &str = "images";

/// Editable site content plus the merged product catalog.
///
/// The live catalog is the shipped base list overlaid with durable
/// overrides; every product mutation re-derives the override subset by
/// comparing the live catalog against the base and persists only that
/// subset. Content sections replace wholesale and persist as one object.
///
/// Persistence failures never roll back an in-memory mutation: the
/// session keeps the new value and the failure is reported through the
/// notifier.
pub struct ContentStore {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    base: Vec<Product>,
    content: SiteContent,
    catalog: Vec<Product>,
    images: Vec<UploadedImage>,
}

impl ContentStore {
    /// Hydrate from durable storage over the shipped base catalog.
    ///
    /// Each blob (content, product overrides, images) is read
    /// independently; a missing or unreadable blob degrades to its
    /// default with a warning, never failing the whole store.
    pub fn hydrate(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        Self::hydrate_with_base(base_catalog(), storage, notifier)
    }

    /// Hydrate over a caller-supplied base catalog.
    pub fn hydrate_with_base(
        base: Vec<Product>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let content: SiteContent =
            read_or_default(storage.as_ref(), notifier.as_ref(), CONTENT_KEY, "content");
        let overrides: Vec<Product> = read_or_default(
            storage.as_ref(),
            notifier.as_ref(),
            PRODUCTS_KEY,
            "product edits",
        );
        let images: Vec<UploadedImage> =
            read_or_default(storage.as_ref(), notifier.as_ref(), IMAGES_KEY, "images");

        let catalog = merge_catalog(&base, &overrides);
        Self {
            storage,
            notifier,
            base,
            content,
            catalog,
            images,
        }
    }

    /// The live site content.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// The merged product catalog, base order first.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Uploaded image metadata.
    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    /// Look up a product by id.
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Look up a product by slug.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.slug == slug)
    }

    /// All products in a category, catalog order.
    pub fn products_in_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.catalog
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Wholesale-replace one content section and persist the whole
    /// content object.
    ///
    /// A persistence failure is reported as an error but the in-memory
    /// update stands, so the new value stays usable for the session.
    pub fn update_section(&mut self, update: SectionUpdate) {
        let name = update.section_name();
        match update {
            SectionUpdate::Hero(hero) => self.content.hero = hero,
            SectionUpdate::About(about) => self.content.about = about,
            SectionUpdate::Categories(categories) => self.content.categories = categories,
            SectionUpdate::FeaturedProducts(products) => self.content.featured_products = products,
        }
        match self.storage.set(CONTENT_KEY, &self.content) {
            Ok(()) => {
                self.notifier
                    .notify(Severity::Success, &format!("Saved {name} section."));
            }
            Err(e) => {
                tracing::warn!(error = %e, section = name, "failed to persist content");
                self.notifier.notify(
                    Severity::Error,
                    &format!("Could not save {name} changes; they will be lost when you leave."),
                );
            }
        }
    }

    /// Add a product to the catalog.
    ///
    /// The draft's id is ignored; a fresh id one past the largest known
    /// id is assigned. Validation failures abort with no state change.
    pub fn add_product(&mut self, mut product: Product) -> Result<ProductId, CommerceError> {
        product.validate()?;
        if self.slug_taken(&product.slug, None) {
            return Err(CommerceError::validation("slug", "already in use"));
        }

        product.id = next_product_id(&self.base, &self.catalog);
        let id = product.id;
        let name = product.name.clone();
        self.catalog.push(product);
        self.persist_products();
        self.notifier
            .notify(Severity::Success, &format!("Added product \"{name}\"."));
        Ok(id)
    }

    /// Replace the catalog entry matching `product.id`.
    ///
    /// Returns `Ok(false)` without any change if the id is unknown —
    /// update shares delete's no-op semantics rather than implicitly
    /// inserting.
    pub fn update_product(&mut self, product: Product) -> Result<bool, CommerceError> {
        product.validate()?;
        if self.slug_taken(&product.slug, Some(product.id)) {
            return Err(CommerceError::validation("slug", "already in use"));
        }

        let Some(slot) = self.catalog.iter_mut().find(|p| p.id == product.id) else {
            return Ok(false);
        };
        let name = product.name.clone();
        *slot = product;
        self.persist_products();
        self.notifier
            .notify(Severity::Success, &format!("Updated product \"{name}\"."));
        Ok(true)
    }

    /// Remove the catalog entry with this id; absent ids are a no-op.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let len_before = self.catalog.len();
        self.catalog.retain(|p| p.id != id);
        let removed = self.catalog.len() < len_before;
        if removed {
            self.persist_products();
            self.notifier.notify(Severity::Success, "Product deleted.");
        }
        removed
    }

    /// Add a category tile. The id must be unique within the section.
    pub fn add_category(&mut self, category: ContentCategory) -> Result<(), CommerceError> {
        if self
            .content
            .categories
            .iter()
            .any(|c| c.id == category.id)
        {
            return Err(CommerceError::validation("id", "already in use"));
        }
        let mut categories = self.content.categories.clone();
        categories.push(category);
        self.update_section(SectionUpdate::Categories(categories));
        Ok(())
    }

    /// Replace the category with the same id; absent ids are a no-op.
    pub fn update_category(&mut self, category: ContentCategory) -> bool {
        let mut categories = self.content.categories.clone();
        let Some(slot) = categories.iter_mut().find(|c| c.id == category.id) else {
            return false;
        };
        *slot = category;
        self.update_section(SectionUpdate::Categories(categories));
        true
    }

    /// Remove the category with this id; absent ids are a no-op.
    pub fn delete_category(&mut self, id: &CategoryId) -> bool {
        let mut categories = self.content.categories.clone();
        let len_before = categories.len();
        categories.retain(|c| &c.id != id);
        if categories.len() == len_before {
            return false;
        }
        self.update_section(SectionUpdate::Categories(categories));
        true
    }

    /// Record an uploaded image's metadata. Returns the assigned id.
    pub fn add_image(&mut self, url: impl Into<String>, name: impl Into<String>) -> i64 {
        let id = self.images.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        self.images.push(UploadedImage {
            id,
            url: url.into(),
            name: name.into(),
        });
        self.persist_images();
        id
    }

    /// Remove an uploaded image's metadata; absent ids are a no-op.
    pub fn remove_image(&mut self, id: i64) -> bool {
        let len_before = self.images.len();
        self.images.retain(|i| i.id != id);
        let removed = self.images.len() < len_before;
        if removed {
            self.persist_images();
        }
        removed
    }

    fn slug_taken(&self, slug: &str, exclude: Option<ProductId>) -> bool {
        self.catalog
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != exclude)
    }

    fn persist_products(&self) {
        let overrides = override_subset(&self.base, &self.catalog);
        if let Err(e) = self.storage.set(PRODUCTS_KEY, &overrides) {
            tracing::warn!(error = %e, "failed to persist product overrides");
            self.notifier.notify(
                Severity::Warning,
                "Product changes could not be saved; they are kept for this session only.",
            );
        }
    }

    fn persist_images(&self) {
        if let Err(e) = self.storage.set(IMAGES_KEY, &self.images) {
            tracing::warn!(error = %e, "failed to persist image metadata");
            self.notifier.notify(
                Severity::Warning,
                "Image changes could not be saved; they are kept for this session only.",
            );
        }
    }
}

/// Read a blob, degrading to the default on absence or failure.
///
/// First run (no blob) is silent; an unreadable blob is logged and
/// surfaced as a warning so the editor knows saved work was not loaded.
fn read_or_default<T: DeserializeOwned + Default>(
    storage: &dyn Storage,
    notifier: &dyn Notifier,
    key: &str,
    what: &str,
) -> T {
    match storage.get::<T>(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(error = %e, key, "could not read saved {what}, using defaults");
            notifier.notify(
                Severity::Warning,
                &format!("Saved {what} could not be read; defaults restored."),
            );
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Gallery, ImageSet};
    use crate::money::Money;
    use crate::notify::{MemoryNotifier, NullNotifier};
    use crate::testutil::FailingStore;
    use decibel_kv::MemoryStore;

    fn product(id: i64, name: &str, slug: &str) -> Product {
        Product {
            id: ProductId::new(id),
            slug: slug.to_string(),
            name: name.to_string(),
            category: ProductCategory::Speakers,
            price: Money::from_cents(100_00),
            description: "A product.".to_string(),
            is_new: false,
            images: ImageSet::default(),
            category_images: ImageSet::default(),
            features: String::new(),
            includes: vec![],
            gallery: Gallery::default(),
            related: vec![],
        }
    }

    fn store_with(
        base: Vec<Product>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> ContentStore {
        ContentStore::hydrate_with_base(base, storage, notifier)
    }

    #[test]
    fn test_hydrate_empty_storage_yields_defaults() {
        let store = store_with(
            vec![product(1, "ZX9", "zx9")],
            Arc::new(MemoryStore::new()),
            Arc::new(NullNotifier),
        );
        assert_eq!(store.content(), &SiteContent::default());
        assert_eq!(store.catalog().len(), 1);
        assert!(store.images().is_empty());
    }

    #[test]
    fn test_hydrate_merges_overrides_onto_base() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set(
                PRODUCTS_KEY,
                &vec![product(1, "ZX9 V2", "zx9"), product(99, "New Thing", "new-thing")],
            )
            .unwrap();

        let store = store_with(
            vec![product(1, "ZX9", "zx9")],
            storage,
            Arc::new(NullNotifier),
        );
        let names: Vec<&str> = store.catalog().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ZX9 V2", "New Thing"]);
    }

    #[test]
    fn test_corrupt_content_blob_degrades_that_blob_only() {
        let storage = Arc::new(MemoryStore::new());
        storage.set_raw(CONTENT_KEY, b"{broken").unwrap();
        storage
            .set(PRODUCTS_KEY, &vec![product(9, "Override", "override")])
            .unwrap();
        let notifier = Arc::new(MemoryNotifier::new());

        let store = store_with(vec![], storage, notifier.clone());
        // content degraded to defaults, overrides still applied
        assert_eq!(store.content(), &SiteContent::default());
        assert_eq!(store.catalog().len(), 1);
        assert!(notifier.has(Severity::Warning));
    }

    #[test]
    fn test_update_section_replaces_and_persists_whole_content() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(vec![], storage.clone(), Arc::new(NullNotifier));

        let mut hero = store.content().hero.clone();
        hero.title = "ZX10 Flagship".to_string();
        store.update_section(SectionUpdate::Hero(hero));

        assert_eq!(store.content().hero.title, "ZX10 Flagship");
        let saved: SiteContent = storage.get(CONTENT_KEY).unwrap().unwrap();
        assert_eq!(saved, *store.content());
        // untouched sections still present in the persisted object
        assert_eq!(saved.categories.len(), 3);
    }

    #[test]
    fn test_update_section_persist_failure_keeps_memory_state() {
        let notifier = Arc::new(MemoryNotifier::new());
        let mut store = store_with(vec![], Arc::new(FailingStore), notifier.clone());

        let mut about = store.content().about.clone();
        about.title = "Still the best gear".to_string();
        store.update_section(SectionUpdate::About(about));

        assert_eq!(store.content().about.title, "Still the best gear");
        assert!(notifier.has(Severity::Error));
    }

    #[test]
    fn test_add_product_assigns_fresh_id_and_persists_override_subset() {
        let base = vec![product(1, "ZX9", "zx9"), product(6, "ZX7", "zx7")];
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(base, storage.clone(), Arc::new(NullNotifier));

        let id = store
            .add_product(product(0, "New Thing", "new-thing"))
            .unwrap();
        assert_eq!(id, ProductId::new(7));
        assert_eq!(store.catalog().len(), 3);

        // only the addition is persisted, never the base entries
        let saved: Vec<Product> = storage.get(PRODUCTS_KEY).unwrap().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, id);
    }

    #[test]
    fn test_add_product_zero_price_rejected_catalog_unchanged() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(
            vec![product(1, "ZX9", "zx9")],
            storage.clone(),
            Arc::new(NullNotifier),
        );

        let mut draft = product(0, "Freebie", "freebie");
        draft.price = Money::zero();
        let err = store.add_product(draft).unwrap_err();

        assert_eq!(err.field(), Some("price"));
        assert_eq!(store.catalog().len(), 1);
        assert!(storage.get_raw(PRODUCTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_add_product_duplicate_slug_rejected() {
        let mut store = store_with(
            vec![product(1, "ZX9", "zx9")],
            Arc::new(MemoryStore::new()),
            Arc::new(NullNotifier),
        );

        let err = store.add_product(product(0, "Clone", "zx9")).unwrap_err();
        assert_eq!(err.field(), Some("slug"));
        assert_eq!(store.catalog().len(), 1);
    }

    #[test]
    fn test_update_base_product_persists_exactly_that_entry() {
        let base = vec![product(1, "ZX9", "zx9"), product(2, "ZX7", "zx7")];
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(base, storage.clone(), Arc::new(NullNotifier));

        let mut edited = store.product_by_id(ProductId::new(1)).unwrap().clone();
        edited.price = Money::from_cents(4999_00);
        assert!(store.update_product(edited).unwrap());

        let saved: Vec<Product> = storage.get(PRODUCTS_KEY).unwrap().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, ProductId::new(1));
        assert_eq!(saved[0].price, Money::from_cents(4999_00));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(
            vec![product(1, "ZX9", "zx9")],
            storage.clone(),
            Arc::new(NullNotifier),
        );

        let updated = store.update_product(product(42, "Ghost", "ghost")).unwrap();
        assert!(!updated);
        assert_eq!(store.catalog().len(), 1);
        assert!(storage.get_raw(PRODUCTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_delete_product_and_reverting_edit_clears_override() {
        let base = vec![product(1, "ZX9", "zx9")];
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(base.clone(), storage.clone(), Arc::new(NullNotifier));

        let mut edited = base[0].clone();
        edited.name = "ZX9 V2".to_string();
        store.update_product(edited).unwrap();
        let saved: Vec<Product> = storage.get(PRODUCTS_KEY).unwrap().unwrap();
        assert_eq!(saved.len(), 1);

        // reverting to the base value empties the override subset
        store.update_product(base[0].clone()).unwrap();
        let saved: Vec<Product> = storage.get(PRODUCTS_KEY).unwrap().unwrap();
        assert!(saved.is_empty());

        assert!(store.delete_product(ProductId::new(1)));
        assert!(!store.delete_product(ProductId::new(1)));
        assert!(store.catalog().is_empty());
    }

    #[test]
    fn test_added_product_survives_rehydration() {
        let base = vec![product(1, "ZX9", "zx9")];
        let storage = Arc::new(MemoryStore::new());

        let id = {
            let mut store = store_with(base.clone(), storage.clone(), Arc::new(NullNotifier));
            store
                .add_product(product(0, "New Thing", "new-thing"))
                .unwrap()
        };

        let store = store_with(base, storage, Arc::new(NullNotifier));
        assert_eq!(store.catalog().len(), 2);
        assert_eq!(store.product_by_slug("new-thing").unwrap().id, id);
    }

    #[test]
    fn test_category_crud_routes_through_content() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(vec![], storage.clone(), Arc::new(NullNotifier));

        let accessories = ContentCategory {
            id: CategoryId::new("accessories"),
            name: "Accessories".to_string(),
            image: "/assets/accessories.png".to_string(),
            href: "/category/accessories".to_string(),
        };
        store.add_category(accessories.clone()).unwrap();
        assert_eq!(store.content().categories.len(), 4);

        // duplicate id rejected
        let err = store.add_category(accessories.clone()).unwrap_err();
        assert_eq!(err.field(), Some("id"));

        let mut renamed = accessories.clone();
        renamed.name = "Audio Accessories".to_string();
        assert!(store.update_category(renamed));
        assert!(!store.update_category(ContentCategory {
            id: CategoryId::new("ghost"),
            name: String::new(),
            image: String::new(),
            href: String::new(),
        }));

        assert!(store.delete_category(&CategoryId::new("accessories")));
        assert!(!store.delete_category(&CategoryId::new("accessories")));

        // the whole content object was persisted with the final state
        let saved: SiteContent = storage.get(CONTENT_KEY).unwrap().unwrap();
        assert_eq!(saved.categories.len(), 3);
    }

    #[test]
    fn test_image_library_roundtrip() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = store_with(vec![], storage.clone(), Arc::new(NullNotifier));

        let first = store.add_image("data:image/png;base64,AAA", "hero.png");
        let second = store.add_image("data:image/png;base64,BBB", "about.png");
        assert_eq!((first, second), (1, 2));

        assert!(store.remove_image(first));
        assert!(!store.remove_image(first));

        let saved: Vec<UploadedImage> = storage.get(IMAGES_KEY).unwrap().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "about.png");
    }

    #[test]
    fn test_queries() {
        let mut earphones = product(3, "YX1", "yx1");
        earphones.category = ProductCategory::Earphones;
        let base = vec![product(1, "ZX9", "zx9"), earphones];
        let store = store_with(base, Arc::new(MemoryStore::new()), Arc::new(NullNotifier));

        assert_eq!(store.product_by_slug("yx1").unwrap().id, ProductId::new(3));
        assert!(store.product_by_slug("ghost").is_none());
        assert_eq!(store.products_in_category(ProductCategory::Speakers).len(), 1);
        assert!(store
            .products_in_category(ProductCategory::Headphones)
            .is_empty());
    }
}
