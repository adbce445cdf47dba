//! Stallfront CLI - drive the shop's cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a line to the cart
//! stallfront add "Red Mug" "₦2,500"
//!
//! # Show the cart (or its HTML fragment)
//! stallfront show
//! stallfront show --html
//!
//! # Remove the first line
//! stallfront remove 0
//!
//! # Print the WhatsApp checkout link
//! stallfront checkout
//!
//! # Browse a catalog file and add a product from it
//! stallfront shop catalog.json --filter women
//! stallfront add-product catalog.json 2
//! ```
//!
//! The cart lives in `<STALLFRONT_DATA_DIR>/<STALLFRONT_CART_KEY>.json`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stallfront_storefront::StorefrontConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "stallfront")]
#[command(author, version, about = "Stallfront cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a line to the cart
    Add {
        /// Product name
        name: String,

        /// Price as displayed, e.g. "₦1,999.50"
        price: String,
    },
    /// Remove the line at a position
    Remove {
        /// Zero-based position shown by `show`
        index: String,
    },
    /// Show the cart
    Show {
        /// Print the HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Hand the order off to WhatsApp
    Checkout,
    /// Empty the cart slot
    Clear,
    /// List the products in a catalog file
    Shop {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Category filter (default: the catalog's active filter)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Add a product from a catalog file to the cart
    AddProduct {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Zero-based product position in the catalog
        index: usize,
    },
    /// Print the contact-page WhatsApp link
    Contact,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stallfront_storefront=info,stallfront_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Add { name, price } => commands::cart::add(&config, &name, &price),
        Commands::Remove { index } => commands::cart::remove(&config, &index),
        Commands::Show { html } => commands::cart::show(&config, html)?,
        Commands::Checkout => commands::cart::checkout(&config)?,
        Commands::Clear => commands::cart::clear(&config)?,
        Commands::Shop { catalog, filter } => {
            commands::shop::list(&config, &catalog, filter.as_deref())?;
        }
        Commands::AddProduct { catalog, index } => {
            commands::shop::add_product(&config, &catalog, index)?;
        }
        Commands::Contact => commands::cart::contact(&config)?,
    }
    Ok(())
}
