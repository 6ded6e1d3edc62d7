//! Decibel CLI - drive the storefront engines from the terminal.
//!
//! Commands:
//! - `decibel catalog` - browse and edit the product catalog
//! - `decibel cart` - manage the shopping cart
//! - `decibel content` - edit site content and the image library
//! - `decibel checkout` - interactive checkout for the current cart
//!
//! State lives in a data directory (default `.decibel/`) as one JSON
//! file per storage key, the same blobs the engines would keep in any
//! other durable store.

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{CartArgs, CatalogArgs, CheckoutArgs, ContentArgs};

/// Decibel CLI - storefront demo engines on the command line
#[derive(Parser)]
#[command(name = "decibel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory for durable state
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit the product catalog
    Catalog(CatalogArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Edit site content and the image library
    Content(ContentArgs),

    /// Interactive checkout for the current cart
    Checkout(CheckoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::CliConfig::resolve(cli.config.as_deref())?;
    init_tracing(cli.verbose, config.log.as_deref());

    let output = output::Output::new(cli.verbose);
    let ctx = context::Context::open(cli.data_dir.clone(), &config, output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Content(args) => commands::content::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
    };

    if let Err(ref e) = result {
        ctx.output.error(&format!("{e:#}"));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool, configured: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(fallback)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
