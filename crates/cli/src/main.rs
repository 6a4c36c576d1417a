//! Barco CLI - inspect and edit the persisted storefront cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart with formatted prices
//! barco show
//!
//! # Add a product by hand
//! barco add --id "Oak Dresser" --name "Oak Dresser" --price 12500 --image /images/dresser.jpg
//!
//! # Add a product record exported from the CMS
//! barco add-product sofa.json --quantity 2
//!
//! # Change or drop a line
//! barco set-quantity "Oak Dresser" 3
//! barco remove "Oak Dresser"
//! ```
//!
//! # Commands
//!
//! - `show` - List lines, item count and subtotal
//! - `count` - Print the badge count (total units)
//! - `total` - Print the unrounded total price
//! - `add` / `add-product` - Add a line and print the confirmation
//! - `remove` / `set-quantity` / `clear` - Edit lines
//!
//! The cart is read from and written to the slot configured by
//! `CART_STORAGE_DIR` and `CART_STORAGE_KEY`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use barco_core::Quantity;
use barco_storefront::cart::{CartLineItem, CartStore};
use barco_storefront::config::CartConfig;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "barco")]
#[command(author, version, about = "Barco storefront cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cart contents
    Show,
    /// Print the total number of units in the cart
    Count,
    /// Print the total price of the cart
    Total,
    /// Add a line item
    Add {
        /// Product ID
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Image URL
        #[arg(short, long)]
        image: String,

        /// Number of units
        #[arg(short, long, default_value = "1")]
        quantity: Quantity,

        /// Product page slug
        #[arg(short, long)]
        slug: Option<String>,
    },
    /// Add a product from a JSON record
    AddProduct {
        /// Path to the product JSON file
        file: PathBuf,

        /// Number of units
        #[arg(short, long, default_value = "1")]
        quantity: Quantity,
    },
    /// Remove a line item
    Remove {
        /// Product ID
        id: String,
    },
    /// Set the quantity of a line item (0 removes it)
    SetQuantity {
        /// Product ID
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Remove every line item
    Clear,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CartConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration from environment (needed for Sentry init)
    let config = CartConfig::from_env();

    // Initialize Sentry (must be done before tracing subscriber)
    let sentry_guard = config.as_ref().ok().and_then(init_sentry);

    // Logs go to stderr so command output on stdout stays scriptable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "barco_storefront=info,barco_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if sentry_guard.is_some() {
        tracing::info!("Sentry initialized");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::from(2);
        }
    };

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &CartConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = CartStore::open(config.persistence());

    match cli.command {
        Commands::Show => commands::cart::show(&cart, config.currency),
        Commands::Count => commands::cart::count(&cart),
        Commands::Total => commands::cart::total(&cart, config.currency),
        Commands::Add {
            id,
            name,
            price,
            image,
            quantity,
            slug,
        } => {
            let mut item = CartLineItem::new(id, name, price, image, quantity);
            if let Some(slug) = slug {
                item = item.with_slug(barco_core::Slug::new(slug));
            }
            commands::cart::add(&mut cart, item);
        }
        Commands::AddProduct { file, quantity } => {
            commands::cart::add_product(&mut cart, &file, quantity)?;
        }
        Commands::Remove { id } => commands::cart::remove(&mut cart, &id.into()),
        Commands::SetQuantity { id, quantity } => {
            commands::cart::set_quantity(&mut cart, &id.into(), quantity);
        }
        Commands::Clear => commands::cart::clear(&mut cart),
    }

    // Flush on exit so a failed write surfaces as a non-zero exit code
    cart.close()?;
    Ok(())
}
