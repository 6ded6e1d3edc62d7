//! Catalog browsing and editing commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use decibel_commerce::catalog::{Gallery, ImageSet, Product, ProductCategory};
use decibel_commerce::{Money, ProductId};

use crate::context::Context;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products, optionally filtered by category
    List {
        /// Category filter: headphones, speakers, or earphones
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one product by slug
    Show { slug: String },

    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: String,
        /// headphones, speakers, or earphones
        #[arg(long)]
        category: String,
        /// Price in dollars
        #[arg(long)]
        price: f64,
        #[arg(long)]
        description: String,
        /// Mark as a new product
        #[arg(long)]
        new: bool,
    },

    /// Update a product by id
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        /// headphones, speakers, or earphones
        #[arg(long)]
        category: Option<String>,
        /// Price in dollars
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        /// Mark or unmark as a new product
        #[arg(long)]
        new: Option<bool>,
    },

    /// Delete a product by id
    Delete { id: i64 },
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List { category } => list(category.as_deref(), ctx),
        CatalogCommand::Show { slug } => show(&slug, ctx),
        CatalogCommand::Add {
            name,
            slug,
            category,
            price,
            description,
            new,
        } => add(name, slug, &category, price, description, new, ctx),
        CatalogCommand::Update {
            id,
            name,
            slug,
            category,
            price,
            description,
            new,
        } => update(id, name, slug, category, price, description, new, ctx),
        CatalogCommand::Delete { id } => delete(id, ctx),
    }
}

fn parse_category(s: &str) -> Result<ProductCategory> {
    match ProductCategory::from_str(s) {
        Some(category) => Ok(category),
        None => bail!("Unknown category {s:?} (expected headphones, speakers, or earphones)"),
    }
}

fn list(category: Option<&str>, ctx: &Context) -> Result<()> {
    let store = ctx.content_store();
    let products: Vec<&Product> = match category {
        Some(s) => store.products_in_category(parse_category(s)?),
        None => store.catalog().iter().collect(),
    };

    if products.is_empty() {
        ctx.output.info("No products.");
        return Ok(());
    }

    ctx.output.header("Catalog");
    for product in products {
        let flash = if product.is_new { "  [new]" } else { "" };
        println!(
            "  {:>3}  {:<32} {:<11} {:>12}{flash}",
            product.id,
            product.name,
            product.category.as_str(),
            product.price.to_string(),
        );
    }
    Ok(())
}

fn show(slug: &str, ctx: &Context) -> Result<()> {
    let store = ctx.content_store();
    let Some(product) = store.product_by_slug(slug) else {
        bail!("No product with slug {slug:?}");
    };

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("slug", &product.slug);
    ctx.output.kv("category", product.category.as_str());
    ctx.output.kv("price", &product.price.to_string());
    ctx.output.kv("new", if product.is_new { "yes" } else { "no" });
    ctx.output.blank();
    println!("{}", product.description);
    if !product.includes.is_empty() {
        ctx.output.blank();
        ctx.output.header("In the box");
        for included in &product.includes {
            println!("  {}x {}", included.quantity, included.item);
        }
    }
    if !product.related.is_empty() {
        ctx.output.blank();
        ctx.output.header("You may also like");
        for related in &product.related {
            println!("  {}  ({})", related.name, related.slug);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add(
    name: String,
    slug: String,
    category: &str,
    price: f64,
    description: String,
    new: bool,
    ctx: &Context,
) -> Result<()> {
    let mut store = ctx.content_store();
    let draft = Product {
        id: ProductId::new(0), // replaced by the store
        slug,
        name,
        category: parse_category(category)?,
        price: Money::from_dollars(price),
        description,
        is_new: new,
        images: ImageSet::default(),
        category_images: ImageSet::default(),
        features: String::new(),
        includes: vec![],
        gallery: Gallery::default(),
        related: vec![],
    };

    let id = store.add_product(draft)?;
    ctx.output.debug(&format!("assigned id {id}"));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn update(
    id: i64,
    name: Option<String>,
    slug: Option<String>,
    category: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    new: Option<bool>,
    ctx: &Context,
) -> Result<()> {
    let mut store = ctx.content_store();
    let Some(existing) = store.product_by_id(ProductId::new(id)) else {
        bail!("No product with id {id}");
    };

    let mut edited = existing.clone();
    if let Some(name) = name {
        edited.name = name;
    }
    if let Some(slug) = slug {
        edited.slug = slug;
    }
    if let Some(category) = category {
        edited.category = parse_category(&category)?;
    }
    if let Some(price) = price {
        edited.price = Money::from_dollars(price);
    }
    if let Some(description) = description {
        edited.description = description;
    }
    if let Some(new) = new {
        edited.is_new = new;
    }

    store.update_product(edited)?;
    Ok(())
}

fn delete(id: i64, ctx: &Context) -> Result<()> {
    let mut store = ctx.content_store();
    if !store.delete_product(ProductId::new(id)) {
        ctx.output.info(&format!("No product with id {id}; nothing to do."));
    }
    Ok(())
}
