//! Store-page commands: the derived product catalog.
//!
//! The catalog is recomputed from the item store's persisted snapshot on
//! every command, the same read-on-load model as the web store page.

use rust_decimal::Decimal;

use feira_core::{ItemId, format_brl};
use feira_store::catalog::{derive_catalog, is_in_cart, search_products};
use feira_store::{CartStore, Config, ItemStore};

use super::cart::attach_badge;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// List the catalog, with an "already in cart" marker.
pub fn products(config: &Config, search: Option<String>) -> CommandResult {
    let store = ItemStore::load(config)?;
    let catalog = derive_catalog(store.items());
    let cart = CartStore::load(config);

    let shown = search_products(&catalog, search.as_deref().unwrap_or(""));
    tracing::info!("{} product(s)", shown.len());
    for product in shown {
        tracing::info!(
            "{}  {}{}{}  {}{}",
            product.id,
            product.name,
            if product.brand.is_empty() { "" } else { " / " },
            product.brand,
            format_brl(product.unit_price),
            if is_in_cart(cart.lines(), &product.id) {
                " [in cart]"
            } else {
                ""
            },
        );
    }
    Ok(())
}

/// Add a catalog product to the cart.
pub fn add_to_cart(config: &Config, id: &str, quantity: Option<Decimal>) -> CommandResult {
    let store = ItemStore::load(config)?;
    let catalog = derive_catalog(store.items());
    let id = ItemId::new(id);

    let Some(product) = catalog.iter().find(|p| p.id == id) else {
        tracing::warn!("No available product with id {id}");
        return Ok(());
    };

    let mut cart = CartStore::load(config);
    attach_badge(&mut cart);
    cart.add_product(product, quantity)?;
    Ok(())
}
