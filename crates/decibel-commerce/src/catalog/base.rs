//! The build-time-embedded base catalog.
//!
//! Six demo products shipped with the storefront. This list is the
//! immutable base layer of the catalog merge; user edits are stored
//! separately as overrides and never touch it.

use crate::catalog::{Gallery, ImageSet, IncludedItem, Product, ProductCategory, RelatedProduct};
use crate::ids::ProductId;
use crate::money::Money;

fn images(folder: &str, file: &str) -> ImageSet {
    ImageSet::new(
        format!("/assets/{folder}/mobile/{file}.jpg"),
        format!("/assets/{folder}/tablet/{file}.jpg"),
        format!("/assets/{folder}/desktop/{file}.jpg"),
    )
}

fn gallery(folder: &str) -> Gallery {
    Gallery {
        first: images(folder, "image-gallery-1"),
        second: images(folder, "image-gallery-2"),
        third: images(folder, "image-gallery-3"),
    }
}

fn related(folder: &str, slug: &str, name: &str) -> RelatedProduct {
    RelatedProduct {
        slug: slug.to_string(),
        name: name.to_string(),
        images: images(folder, "image-product"),
    }
}

/// The shipped base catalog, in display order.
pub fn base_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            slug: "yx1-earphones".to_string(),
            name: "YX1 Wireless Earphones".to_string(),
            category: ProductCategory::Earphones,
            price: Money::from_cents(599_00),
            description: "Tailor your listening experience with bespoke dynamic drivers \
                          from the new YX1 Wireless Earphones. Enjoy incredible \
                          high-fidelity sound even in noisy environments with its \
                          active noise cancellation feature."
                .to_string(),
            is_new: true,
            images: images("product-yx1-earphones", "image-product"),
            category_images: images("product-yx1-earphones", "image-category-page-preview"),
            features: "Experience unrivalled stereo sound thanks to innovative acoustic \
                       technology. With improved ergonomics designed for full day wearing, \
                       these revolutionary earphones have been finely crafted to provide \
                       you with the perfect fit, delivering complete comfort all day long \
                       while enjoying exceptional noise isolation and truly immersive sound."
                .to_string(),
            includes: vec![
                IncludedItem::new(2, "Earphone unit"),
                IncludedItem::new(6, "Multi-size earplugs"),
                IncludedItem::new(1, "User manual"),
                IncludedItem::new(1, "USB-C charging cable"),
                IncludedItem::new(1, "Travel pouch"),
            ],
            gallery: gallery("product-yx1-earphones"),
            related: vec![
                related("product-xx99-mark-one-headphones", "xx99-mark-one-headphones", "XX99 Mark I"),
                related("product-xx59-headphones", "xx59-headphones", "XX59"),
                related("product-zx9-speaker", "zx9-speaker", "ZX9 Speaker"),
            ],
        },
        Product {
            id: ProductId::new(2),
            slug: "xx59-headphones".to_string(),
            name: "XX59 Headphones".to_string(),
            category: ProductCategory::Headphones,
            price: Money::from_cents(899_00),
            description: "Enjoy your audio almost anywhere and customize it to your \
                          specific tastes with the XX59 headphones. The stylish yet \
                          durable versatile wireless headset is a brilliant companion \
                          at home or on the move."
                .to_string(),
            is_new: false,
            images: images("product-xx59-headphones", "image-product"),
            category_images: images("product-xx59-headphones", "image-category-page-preview"),
            features: "These headphones have been created from durable, high-quality \
                       materials tough enough to take anywhere. Its compact folding \
                       design fuses comfort and minimalist style making it perfect for \
                       the urban traveller. Pair them with your favourite device over \
                       Bluetooth or plug into any device with the included cable."
                .to_string(),
            includes: vec![
                IncludedItem::new(1, "Headphone unit"),
                IncludedItem::new(2, "Replacement earcups"),
                IncludedItem::new(1, "User manual"),
                IncludedItem::new(1, "3.5mm 5m audio cable"),
            ],
            gallery: gallery("product-xx59-headphones"),
            related: vec![
                related("product-xx99-mark-two-headphones", "xx99-mark-two-headphones", "XX99 Mark II"),
                related("product-xx99-mark-one-headphones", "xx99-mark-one-headphones", "XX99 Mark I"),
                related("product-zx9-speaker", "zx9-speaker", "ZX9 Speaker"),
            ],
        },
        Product {
            id: ProductId::new(3),
            slug: "xx99-mark-one-headphones".to_string(),
            name: "XX99 Mark I Headphones".to_string(),
            category: ProductCategory::Headphones,
            price: Money::from_cents(1750_00),
            description: "As the gold standard for headphones, the classic XX99 Mark I \
                          offers detailed and accurate audio reproduction for audiophiles, \
                          mixing engineers, and music aficionados alike in studios and on \
                          the go."
                .to_string(),
            is_new: false,
            images: images("product-xx99-mark-one-headphones", "image-product"),
            category_images: images(
                "product-xx99-mark-one-headphones",
                "image-category-page-preview",
            ),
            features: "As the headphones all others are measured against, the XX99 Mark I \
                       demonstrates over five decades of audio expertise, redefining the \
                       critical listening experience. This pair of closed-back headphones \
                       is made of industrial, aerospace-grade materials to emphasize \
                       durability at a relatively light weight of 11 oz."
                .to_string(),
            includes: vec![
                IncludedItem::new(1, "Headphone unit"),
                IncludedItem::new(2, "Replacement earcups"),
                IncludedItem::new(1, "User manual"),
                IncludedItem::new(1, "3.5mm 5m audio cable"),
            ],
            gallery: gallery("product-xx99-mark-one-headphones"),
            related: vec![
                related("product-xx99-mark-two-headphones", "xx99-mark-two-headphones", "XX99 Mark II"),
                related("product-xx59-headphones", "xx59-headphones", "XX59"),
                related("product-zx9-speaker", "zx9-speaker", "ZX9 Speaker"),
            ],
        },
        Product {
            id: ProductId::new(4),
            slug: "xx99-mark-two-headphones".to_string(),
            name: "XX99 Mark II Headphones".to_string(),
            category: ProductCategory::Headphones,
            price: Money::from_cents(2999_00),
            description: "The new XX99 Mark II headphones is the pinnacle of pristine \
                          audio. It redefines your premium headphone experience by \
                          reproducing the balanced depth and precision of studio-quality \
                          sound."
                .to_string(),
            is_new: true,
            images: images("product-xx99-mark-two-headphones", "image-product"),
            category_images: images(
                "product-xx99-mark-two-headphones",
                "image-category-page-preview",
            ),
            features: "Featuring a genuine leather head strap and premium earcups, these \
                       headphones deliver superior comfort for those who like to enjoy \
                       endless listening. It includes intuitive controls designed for \
                       any situation. Whether you are taking a business call or just in \
                       your own personal space, the auto on/off and pause features \
                       ensure that you will never miss a beat."
                .to_string(),
            includes: vec![
                IncludedItem::new(1, "Headphone unit"),
                IncludedItem::new(2, "Replacement earcups"),
                IncludedItem::new(1, "User manual"),
                IncludedItem::new(1, "3.5mm 5m audio cable"),
                IncludedItem::new(1, "Travel bag"),
            ],
            gallery: gallery("product-xx99-mark-two-headphones"),
            related: vec![
                related("product-xx99-mark-one-headphones", "xx99-mark-one-headphones", "XX99 Mark I"),
                related("product-xx59-headphones", "xx59-headphones", "XX59"),
                related("product-zx9-speaker", "zx9-speaker", "ZX9 Speaker"),
            ],
        },
        Product {
            id: ProductId::new(5),
            slug: "zx7-speaker".to_string(),
            name: "ZX7 Speaker".to_string(),
            category: ProductCategory::Speakers,
            price: Money::from_cents(3500_00),
            description: "Stream high quality sound wirelessly with minimal to no loss. \
                          The ZX7 speaker uses high-end audiophile components that \
                          represent the top of the line powered speakers for home or \
                          studio use."
                .to_string(),
            is_new: false,
            images: images("product-zx7-speaker", "image-product"),
            category_images: images("product-zx7-speaker", "image-category-page-preview"),
            features: "Reap the advantages of a flat diaphragm tweeter cone. This \
                       provides a fast response rate and excellent high frequencies \
                       that lower tiered bookshelf speakers cannot provide. The woofers \
                       are made from aluminum that produces a unique and clear sound."
                .to_string(),
            includes: vec![
                IncludedItem::new(2, "Speaker unit"),
                IncludedItem::new(2, "Speaker cloth panel"),
                IncludedItem::new(1, "User manual"),
                IncludedItem::new(1, "3.5mm 7.5m audio cable"),
                IncludedItem::new(1, "7.5m optical cable"),
            ],
            gallery: gallery("product-zx7-speaker"),
            related: vec![
                related("product-zx9-speaker", "zx9-speaker", "ZX9 Speaker"),
                related("product-xx99-mark-one-headphones", "xx99-mark-one-headphones", "XX99 Mark I"),
                related("product-xx59-headphones", "xx59-headphones", "XX59"),
            ],
        },
        Product {
            id: ProductId::new(6),
            slug: "zx9-speaker".to_string(),
            name: "ZX9 Speaker".to_string(),
            category: ProductCategory::Speakers,
            price: Money::from_cents(4500_00),
            description: "Upgrade your sound system with the all new ZX9 active speaker. \
                          It is a bookshelf speaker system that offers truly wireless \
                          connectivity -- creating new possibilities for more pleasing \
                          and practical audio setups."
                .to_string(),
            is_new: true,
            images: images("product-zx9-speaker", "image-product"),
            category_images: images("product-zx9-speaker", "image-category-page-preview"),
            features: "Connect via Bluetooth or nearly any wired source. This speaker \
                       features optical, digital coaxial, USB Type-B, stereo RCA, and \
                       stereo XLR inputs, allowing you to have up to five wired source \
                       devices connected for easy switching. Improved bluetooth \
                       technology offers near lossless audio quality at up to 328ft."
                .to_string(),
            includes: vec![
                IncludedItem::new(2, "Speaker unit"),
                IncludedItem::new(2, "Speaker cloth panel"),
                IncludedItem::new(1, "User manual"),
                IncludedItem::new(1, "3.5mm 10m audio cable"),
                IncludedItem::new(1, "10m optical cable"),
            ],
            gallery: gallery("product-zx9-speaker"),
            related: vec![
                related("product-zx7-speaker", "zx7-speaker", "ZX7 Speaker"),
                related("product-xx99-mark-one-headphones", "xx99-mark-one-headphones", "XX99 Mark I"),
                related("product-xx59-headphones", "xx59-headphones", "XX59"),
            ],
        },
    ]
}
