//! Editable site content and the content/product store.

mod sections;
mod store;

pub use sections::{
    AboutSection, ContentCategory, FeaturedProduct, HeroSection, SectionUpdate, SiteContent,
    UploadedImage,
};
pub use store::{ContentStore, CONTENT_KEY, IMAGES_KEY, PRODUCTS_KEY};
