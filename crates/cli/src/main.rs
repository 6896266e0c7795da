//! Brandstore CLI - Catalog browsing and cart management.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! brandstore catalog items --category nike
//! brandstore catalog popular
//!
//! # Search, optionally narrowed to a price chip or explicit bounds
//! brandstore search "ao khoac" --range "Dưới 500K"
//! brandstore search giay --min 500000 --max 2000000
//!
//! # Manage the cart
//! brandstore cart add --title "Giày Nike Air" --size M --color "Đen"
//! brandstore cart list
//! brandstore cart plus 0
//! brandstore cart minus 0
//! brandstore cart summary
//! ```
//!
//! Configuration comes from the environment (see
//! `brandstore_storefront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "brandstore")]
#[command(author, version, about = "Brandstore catalog and cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse catalog records
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Search products by keyword and price
    Search {
        /// Keyword matched against title and category (accents and case ignored)
        keyword: String,

        /// Restrict to one category key (`all` for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Price chip label, e.g. "Dưới 500K"
        #[arg(short, long, conflicts_with_all = ["min", "max"])]
        range: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long, requires = "max")]
        min: Option<Decimal>,

        /// Maximum price (inclusive)
        #[arg(long, requires = "min")]
        max: Option<Decimal>,
    },
    /// Manage the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products in a category
    Items {
        /// Category key (`all` for every category)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// List recommended products
    Popular,
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a catalog product to the cart
    Add {
        /// Exact product title
        #[arg(short, long)]
        title: String,

        /// Size (S, M, L, XL)
        #[arg(short, long)]
        size: String,

        /// Color (Đỏ, Trắng, Đen, Nâu)
        #[arg(short, long)]
        color: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Show cart lines
    List,
    /// Increase the quantity of a line
    Plus {
        /// Line position as shown by `cart list`
        index: usize,
    },
    /// Decrease the quantity of a line, removing it at zero
    Minus {
        /// Line position as shown by `cart list`
        index: usize,
    },
    /// Show subtotal, tax, delivery and total
    Summary,
    /// Remove every line
    Clear,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "brandstore_cli=info,brandstore_storefront=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        if e.is_storage() {
            tracing::warn!("Cart left at its last saved state");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> brandstore_storefront::Result<()> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Items { category } => commands::catalog::items(&ctx, &category)?,
            CatalogAction::Popular => commands::catalog::popular(&ctx)?,
            CatalogAction::Categories => commands::catalog::categories(&ctx)?,
        },
        Commands::Search {
            keyword,
            category,
            range,
            min,
            max,
        } => {
            let bounds = min.zip(max);
            commands::search::run(&ctx, &keyword, &category, range.as_deref(), bounds)?;
        }
        Commands::Cart { action } => match action {
            CartAction::Add {
                title,
                size,
                color,
                quantity,
            } => commands::cart::add(&ctx, &title, &size, &color, quantity)?,
            CartAction::List => commands::cart::list(&ctx)?,
            CartAction::Plus { index } => commands::cart::plus(&ctx, index)?,
            CartAction::Minus { index } => commands::cart::minus(&ctx, index)?,
            CartAction::Summary => commands::cart::summary(&ctx)?,
            CartAction::Clear => commands::cart::clear(&ctx)?,
        },
    }
    Ok(())
}
