//! Site content sections and their shipped defaults.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// The home page hero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: String,
    pub background_image: String,
}

/// The "about the shop" block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AboutSection {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// A category tile on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentCategory {
    /// Unique within the categories section.
    pub id: CategoryId,
    pub name: String,
    pub image: String,
    pub href: String,
}

/// A featured product teaser on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub featured: bool,
}

/// Metadata for an image uploaded through the content editor.
///
/// The upload-to-data-URI conversion happens outside the core; only the
/// resulting metadata is stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedImage {
    pub id: i64,
    /// Usually a `data:` URI.
    pub url: String,
    pub name: String,
}

/// All editable site content.
///
/// Sections are replaced wholesale on edit; there is no partial-field
/// merge (single-editor assumption).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub categories: Vec<ContentCategory>,
    pub featured_products: Vec<FeaturedProduct>,
}

impl Default for SiteContent {
    /// The shipped site copy, used until an editor saves changes.
    fn default() -> Self {
        Self {
            hero: HeroSection {
                title: "XX99 Mark II Headphones".to_string(),
                subtitle: "New Product".to_string(),
                description: "Experience natural, lifelike audio and exceptional build \
                              quality made for the passionate music enthusiast."
                    .to_string(),
                button_text: "See Product".to_string(),
                background_image: "/assets/home/desktop/image-hero.jpg".to_string(),
            },
            about: AboutSection {
                title: "Bringing you the best audio gear".to_string(),
                description: "Located at the heart of New York City, Decibel is the \
                              premier store for high end headphones, earphones, \
                              speakers, and audio accessories. We have a large showroom \
                              and luxury demonstration rooms available for you to browse \
                              and experience a wide range of our products."
                    .to_string(),
                image: "/assets/shared/desktop/image-best-gear.jpg".to_string(),
            },
            categories: vec![
                ContentCategory {
                    id: CategoryId::new("headphones"),
                    name: "Headphones".to_string(),
                    image: "/assets/shared/desktop/image-category-thumbnail-headphones.png"
                        .to_string(),
                    href: "/category/headphones".to_string(),
                },
                ContentCategory {
                    id: CategoryId::new("speakers"),
                    name: "Speakers".to_string(),
                    image: "/assets/shared/desktop/image-category-thumbnail-speakers.png"
                        .to_string(),
                    href: "/category/speakers".to_string(),
                },
                ContentCategory {
                    id: CategoryId::new("earphones"),
                    name: "Earphones".to_string(),
                    image: "/assets/shared/desktop/image-category-thumbnail-earphones.png"
                        .to_string(),
                    href: "/category/earphones".to_string(),
                },
            ],
            featured_products: vec![
                FeaturedProduct {
                    id: "zx9-speaker".to_string(),
                    name: "ZX9 Speaker".to_string(),
                    description: "Upgrade to premium speakers that are phenomenally built \
                                  to deliver truly remarkable sound."
                        .to_string(),
                    image: "/assets/home/desktop/image-speaker-zx9.png".to_string(),
                    link: "/product/zx9-speaker".to_string(),
                    featured: true,
                },
                FeaturedProduct {
                    id: "zx7-speaker".to_string(),
                    name: "ZX7 Speaker".to_string(),
                    description: String::new(),
                    image: "/assets/home/desktop/image-speaker-zx7.jpg".to_string(),
                    link: "/product/zx7-speaker".to_string(),
                    featured: true,
                },
                FeaturedProduct {
                    id: "yx1-earphones".to_string(),
                    name: "YX1 Earphones".to_string(),
                    description: String::new(),
                    image: "/assets/home/desktop/image-earphones-yx1.jpg".to_string(),
                    link: "/product/yx1-earphones".to_string(),
                    featured: true,
                },
            ],
        }
    }
}

/// A wholesale replacement for one content section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Hero(HeroSection),
    About(AboutSection),
    Categories(Vec<ContentCategory>),
    FeaturedProducts(Vec<FeaturedProduct>),
}

impl SectionUpdate {
    /// The section's display name, for messages.
    pub fn section_name(&self) -> &'static str {
        match self {
            SectionUpdate::Hero(_) => "hero",
            SectionUpdate::About(_) => "about",
            SectionUpdate::Categories(_) => "categories",
            SectionUpdate::FeaturedProducts(_) => "featured products",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_has_three_categories() {
        let content = SiteContent::default();
        assert_eq!(content.categories.len(), 3);

        let ids: Vec<&str> = content
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["headphones", "speakers", "earphones"]);
    }

    #[test]
    fn test_default_content_roundtrips_through_json() {
        let content = SiteContent::default();
        let json = serde_json::to_string(&content).unwrap();
        let back: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
