//! Feira CLI - shopping list, catalog, and cart management.
//!
//! # Usage
//!
//! ```bash
//! # Add an item to the list (price in centavos or formatted: "450" == "R$ 4,50")
//! feira item add "Arroz" --brand "Tio João" --quantity 5 --price 450 --unit kg
//!
//! # Show the list (searchable, 12 items per page)
//! feira item list --search arroz --page 2
//!
//! # Browse the store catalog and add to the cart
//! feira store products
//! feira store add <product-id> --quantity 2
//!
//! # Edit the cart
//! feira cart show
//! feira cart paid <product-id> 500
//!
//! # Export the list
//! feira export --output lista.json
//! ```
//!
//! # Commands
//!
//! - `item` - Manage the shopping list
//! - `store` - Browse the derived product catalog
//! - `cart` - Manage the cart
//! - `export` - Write the list as a JSON document

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use feira_core::UnitType;
use feira_store::Config;

mod commands;

#[derive(Parser)]
#[command(name = "feira")]
#[command(author, version, about = "Feira shopping-list and mini-store tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping list
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },
    /// Browse the store catalog
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Export the list as a JSON document
    Export {
        /// Output file (default: lista-compras.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// Add an item to the list
    Add {
        /// Item name (blank names are rejected)
        name: String,

        /// Brand
        #[arg(short, long, default_value = "")]
        brand: String,

        /// Image URL (blank falls back to a placeholder)
        #[arg(short, long, default_value = "")]
        image: String,

        /// Quantity
        #[arg(short, long, default_value = "1")]
        quantity: Decimal,

        /// Unit price, centavos or currency-formatted ("450" or "R$ 4,50")
        #[arg(short, long, default_value = "")]
        price: String,

        /// Unit type (`unidade` or `kg`)
        #[arg(short, long, default_value = "unidade")]
        unit: UnitType,
    },
    /// Show the list
    List {
        /// Case-insensitive name/brand filter
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (12 items per page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Replace an item's fields
    Edit {
        /// Item id
        id: String,

        /// New name (blank names are rejected)
        name: String,

        #[arg(short, long, default_value = "")]
        brand: String,

        #[arg(short, long, default_value = "")]
        image: String,

        #[arg(short, long, default_value = "1")]
        quantity: Decimal,

        /// Unit price, centavos or currency-formatted
        #[arg(short, long, default_value = "")]
        price: String,

        #[arg(short, long, default_value = "unidade")]
        unit: UnitType,
    },
    /// Mark an item as purchased (or not, with --off)
    Purchased {
        id: String,
        #[arg(long)]
        off: bool,
    },
    /// Mark an item as unavailable (or not, with --off)
    Unavailable {
        id: String,
        #[arg(long)]
        off: bool,
    },
    /// Remove an item from the list
    Remove { id: String },
    /// Show the grand total over available items
    Total,
}

#[derive(Subcommand)]
enum StoreAction {
    /// List catalog products (unavailable items never appear)
    Products {
        /// Case-insensitive name/brand filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,

        /// Quantity to add (default: the product's list quantity, or 1)
        #[arg(short, long)]
        quantity: Option<Decimal>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines, discounts, and the total
    Show,
    /// Set a line's quantity (invalid input becomes 1)
    Quantity { id: String, value: String },
    /// Set a line's paid price (centavos or currency-formatted)
    Paid { id: String, value: String },
    /// Remove a line from the cart
    Remove { id: String },
    /// Empty the whole cart
    Clear,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    match cli.command {
        Commands::Item { action } => match action {
            ItemAction::Add {
                name,
                brand,
                image,
                quantity,
                price,
                unit,
            } => commands::items::add(&config, name, brand, image, quantity, &price, unit)?,
            ItemAction::List { search, page } => commands::items::list(&config, search, page)?,
            ItemAction::Edit {
                id,
                name,
                brand,
                image,
                quantity,
                price,
                unit,
            } => commands::items::edit(&config, &id, name, brand, image, quantity, &price, unit)?,
            ItemAction::Purchased { id, off } => {
                commands::items::set_purchased(&config, &id, !off)?;
            }
            ItemAction::Unavailable { id, off } => {
                commands::items::set_unavailable(&config, &id, !off)?;
            }
            ItemAction::Remove { id } => commands::items::remove(&config, &id)?,
            ItemAction::Total => commands::items::total(&config)?,
        },
        Commands::Store { action } => match action {
            StoreAction::Products { search } => commands::store::products(&config, search)?,
            StoreAction::Add { id, quantity } => {
                commands::store::add_to_cart(&config, &id, quantity)?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config),
            CartAction::Quantity { id, value } => {
                commands::cart::set_quantity(&config, &id, &value)?;
            }
            CartAction::Paid { id, value } => commands::cart::set_paid(&config, &id, &value)?,
            CartAction::Remove { id } => commands::cart::remove(&config, &id)?,
            CartAction::Clear => commands::cart::clear(&config)?,
        },
        Commands::Export { output } => commands::items::export(&config, output)?,
    }
    Ok(())
}
