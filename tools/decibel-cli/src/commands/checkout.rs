//! Interactive checkout.

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::{Input, Select};

use decibel_commerce::checkout::{CheckoutForm, OrderSummary, PaymentMethod};

use crate::context::Context;

#[derive(Args)]
pub struct CheckoutArgs {}

/// Run the interactive checkout for the current cart.
pub fn run(_args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.cart_session();
    if session.cart().is_empty() {
        bail!("Your cart is empty; add something first (decibel cart add <slug>)");
    }

    let summary = OrderSummary::for_cart(session.cart());
    ctx.output.header("Order summary");
    for item in session.cart().items() {
        println!(
            "  {:<32} {:>3} x {:>10}",
            item.name,
            item.quantity,
            item.price.to_string()
        );
    }
    ctx.output.blank();
    ctx.output.kv("subtotal", &summary.subtotal.to_string());
    ctx.output.kv("vat (20%)", &summary.vat.to_string());
    ctx.output.kv("shipping", &summary.shipping.to_string());
    ctx.output.kv("grand total", &summary.grand_total.to_string());
    ctx.output.blank();

    let form = prompt_form()?;
    let errors = form.validate();
    if !errors.is_empty() {
        for error in &errors {
            ctx.output.error(&format!("{}: {}", error.field, error.message));
        }
        bail!("{} field(s) need attention", errors.len());
    }

    session.clear();
    ctx.output.success(&format!(
        "Thank you for your order, {}! You will be charged {}.",
        form.name, summary.grand_total
    ));
    Ok(())
}

fn prompt_form() -> Result<CheckoutForm> {
    let name: String = text("Name")?;
    let email: String = text("Email address")?;
    let phone: String = text("Phone number")?;
    let address: String = text("Address")?;
    let zip_code: String = text("ZIP code")?;
    let city: String = text("City")?;
    let country: String = text("Country")?;

    let methods = ["e-Money", "Cash on Delivery"];
    let choice = Select::new()
        .with_prompt("Payment method")
        .items(&methods)
        .default(0)
        .interact()?;

    let payment = if choice == 0 {
        PaymentMethod::EMoney {
            number: text("e-Money number")?,
            pin: text("e-Money PIN")?,
        }
    } else {
        PaymentMethod::CashOnDelivery
    };

    Ok(CheckoutForm {
        name,
        email,
        phone,
        address,
        zip_code,
        city,
        country,
        payment,
    })
}

fn text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}
