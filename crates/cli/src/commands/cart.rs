//! Cart-page commands.

use feira_core::{ItemId, format_brl};
use feira_store::events::StoreEvent;
use feira_store::{CartStore, Config};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Subscribe the badge line the web version keeps in its header.
pub fn attach_badge(cart: &mut CartStore) {
    cart.subscribe(|event| {
        if let StoreEvent::CartChanged {
            item_count, total, ..
        } = event
        {
            tracing::info!("Cart: {item_count} item(s), {}", format_brl(*total));
        }
    });
}

/// Show cart lines, per-line discount, and the total.
pub fn show(config: &Config) {
    let cart = CartStore::load(config);

    if cart.is_empty() {
        tracing::info!("Your cart is empty.");
        return;
    }

    for line in cart.lines() {
        let discount = line.discount().round_dp(1);
        tracing::info!(
            "{}  {}  {} × {} (orig. {}) = {}  desc. {discount}%",
            line.id,
            line.name,
            line.quantity,
            format_brl(line.effective_paid_price()),
            format_brl(line.unit_price),
            format_brl(line.line_total()),
        );
    }
    tracing::info!("Cart total: {}", format_brl(cart.total()));
}

/// Set a line's quantity from raw input.
pub fn set_quantity(config: &Config, id: &str, value: &str) -> CommandResult {
    let mut cart = CartStore::load(config);
    attach_badge(&mut cart);
    if !cart.set_quantity(&ItemId::new(id), value)? {
        tracing::warn!("No cart line with id {id}");
    }
    Ok(())
}

/// Set a line's paid price from raw currency-masked input.
pub fn set_paid(config: &Config, id: &str, value: &str) -> CommandResult {
    let mut cart = CartStore::load(config);
    attach_badge(&mut cart);
    if !cart.set_paid_price(&ItemId::new(id), value)? {
        tracing::warn!("No cart line with id {id}");
    }
    Ok(())
}

/// Remove a line.
pub fn remove(config: &Config, id: &str) -> CommandResult {
    let mut cart = CartStore::load(config);
    attach_badge(&mut cart);
    if !cart.remove(&ItemId::new(id))? {
        tracing::warn!("No cart line with id {id}");
    }
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &Config) -> CommandResult {
    let mut cart = CartStore::load(config);
    attach_badge(&mut cart);
    cart.clear()?;
    Ok(())
}
