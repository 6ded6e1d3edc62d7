//! Shopping cart commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use decibel_commerce::ProductId;

use crate::context::Context;

#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartSubcommand,
}

#[derive(Subcommand)]
pub enum CartSubcommand {
    /// Show the cart contents and totals
    Show,

    /// Add a product to the cart by slug
    Add {
        slug: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a line by product id
    Remove { id: i64 },

    /// Replace a line's quantity (0 removes the line)
    Set { id: i64, quantity: u32 },

    /// Empty the cart
    Clear,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartSubcommand::Show => show(ctx),
        CartSubcommand::Add { slug, quantity } => add(&slug, quantity, ctx),
        CartSubcommand::Remove { id } => remove(id, ctx),
        CartSubcommand::Set { id, quantity } => set(id, quantity, ctx),
        CartSubcommand::Clear => clear(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let session = ctx.cart_session();
    let cart = session.cart();

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    for item in cart.items() {
        println!(
            "  {:>3}  {:<32} {:>3} x {:>10} = {:>12}",
            item.product_id,
            item.name,
            item.quantity,
            item.price.to_string(),
            item.line_total().to_string(),
        );
    }
    ctx.output.blank();
    ctx.output.kv("items", &cart.item_count().to_string());
    ctx.output.kv("total", &cart.total().to_string());
    Ok(())
}

fn add(slug: &str, quantity: u32, ctx: &Context) -> Result<()> {
    if quantity == 0 {
        bail!("Quantity must be at least 1");
    }

    let store = ctx.content_store();
    let Some(product) = store.product_by_slug(slug) else {
        bail!("No product with slug {slug:?}");
    };
    let line = product.line_item(quantity);

    let mut session = ctx.cart_session();
    session.add_item(line);
    ctx.output.success(&format!(
        "Added {quantity} x {} ({} items, {} total).",
        product.name,
        session.cart().item_count(),
        session.cart().total(),
    ));
    Ok(())
}

fn remove(id: i64, ctx: &Context) -> Result<()> {
    let mut session = ctx.cart_session();
    if session.remove_item(ProductId::new(id)) {
        ctx.output.success("Removed.");
    } else {
        ctx.output.info(&format!("No cart line with id {id}; nothing to do."));
    }
    Ok(())
}

fn set(id: i64, quantity: u32, ctx: &Context) -> Result<()> {
    let mut session = ctx.cart_session();
    if session.set_quantity(ProductId::new(id), quantity) {
        if quantity == 0 {
            ctx.output.success("Removed.");
        } else {
            ctx.output.success(&format!("Quantity set to {quantity}."));
        }
    } else {
        ctx.output.info(&format!("No cart line with id {id}; nothing to do."));
    }
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let mut session = ctx.cart_session();
    session.clear();
    ctx.output.success("Cart cleared.");
    Ok(())
}
