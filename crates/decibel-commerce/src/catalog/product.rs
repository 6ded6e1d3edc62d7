//! Product types and field validation.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Headphones,
    Speakers,
    Earphones,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Headphones => "headphones",
            ProductCategory::Speakers => "speakers",
            ProductCategory::Earphones => "earphones",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "headphones" => Some(ProductCategory::Headphones),
            "speakers" => Some(ProductCategory::Speakers),
            "earphones" => Some(ProductCategory::Earphones),
            _ => None,
        }
    }

    /// All categories, in display order.
    pub fn all() -> [ProductCategory; 3] {
        [
            ProductCategory::Headphones,
            ProductCategory::Speakers,
            ProductCategory::Earphones,
        ]
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Responsive image variants for one picture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageSet {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl ImageSet {
    pub fn new(
        mobile: impl Into<String>,
        tablet: impl Into<String>,
        desktop: impl Into<String>,
    ) -> Self {
        Self {
            mobile: mobile.into(),
            tablet: tablet.into(),
            desktop: desktop.into(),
        }
    }
}

/// The three-picture product gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Gallery {
    pub first: ImageSet,
    pub second: ImageSet,
    pub third: ImageSet,
}

/// One entry of the "in the box" list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncludedItem {
    pub quantity: u32,
    pub item: String,
}

impl IncludedItem {
    pub fn new(quantity: u32, item: impl Into<String>) -> Self {
        Self {
            quantity,
            item: item.into(),
        }
    }
}

/// A cross-sell summary shown under "you may also like".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedProduct {
    pub slug: String,
    pub name: String,
    pub images: ImageSet,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug; unique across the merged catalog.
    pub slug: String,
    /// Product name.
    pub name: String,
    /// Category.
    pub category: ProductCategory,
    /// Unit price.
    pub price: Money,
    /// Marketing description.
    pub description: String,
    /// Whether the "new product" flash is shown.
    pub is_new: bool,
    /// Main product image.
    pub images: ImageSet,
    /// Thumbnail used on category listings.
    pub category_images: ImageSet,
    /// Features copy.
    pub features: String,
    /// "In the box" contents.
    pub includes: Vec<IncludedItem>,
    /// Gallery pictures.
    pub gallery: Gallery,
    /// Cross-sell summaries.
    pub related: Vec<RelatedProduct>,
}

impl Product {
    /// Validate the user-editable fields.
    ///
    /// Returns the first violation as a field-level error: `name`,
    /// `slug`, and `description` must be non-empty and `price` positive.
    /// The category is enum-typed and cannot be invalid.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::validation("name", "must not be empty"));
        }
        if self.slug.trim().is_empty() {
            return Err(CommerceError::validation("slug", "must not be empty"));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::validation(
                "price",
                "must be greater than zero",
            ));
        }
        if self.description.trim().is_empty() {
            return Err(CommerceError::validation(
                "description",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Build a cart line for this product.
    pub fn line_item(&self, quantity: u32) -> LineItem {
        LineItem::new(
            self.id,
            &self.name,
            self.price,
            quantity,
            &self.images.mobile,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            slug: "zx9-speaker".to_string(),
            name: "ZX9 Speaker".to_string(),
            category: ProductCategory::Speakers,
            price: Money::from_cents(4500_00),
            description: "Upgrade your sound system.".to_string(),
            is_new: true,
            images: ImageSet::default(),
            category_images: ImageSet::default(),
            features: String::new(),
            includes: vec![],
            gallery: Gallery::default(),
            related: vec![],
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut p = product();
        p.name = "   ".to_string();
        let err = p.validate().unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut p = product();
        p.price = Money::zero();
        let err = p.validate().unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut p = product();
        p.description = String::new();
        let err = p.validate().unwrap_err();
        assert_eq!(err.field(), Some("description"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            ProductCategory::from_str("Speakers"),
            Some(ProductCategory::Speakers)
        );
        assert_eq!(ProductCategory::from_str("gadgets"), None);
        assert_eq!(ProductCategory::Earphones.as_str(), "earphones");
    }

    #[test]
    fn test_line_item_captures_price_and_image() {
        let mut p = product();
        p.images.mobile = "/assets/zx9/mobile.jpg".to_string();

        let line = p.line_item(2);
        assert_eq!(line.product_id, p.id);
        assert_eq!(line.price, p.price);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.image, "/assets/zx9/mobile.jpg");
    }
}
