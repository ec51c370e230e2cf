//! Shopping-list commands (the list page).

use std::path::PathBuf;

use chrono::Utc;
use rust_decimal::Decimal;

use feira_core::{ItemId, UnitType, format_brl, parse_cents_string};
use feira_store::export::DEFAULT_EXPORT_FILE;
use feira_store::models::{ItemDraft, ShoppingItem};
use feira_store::query::{ListQuery, list_page};
use feira_store::{Config, ItemStore};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn status_tags(item: &ShoppingItem) -> &'static str {
    match (item.purchased, item.unavailable) {
        (true, true) => " [comprado] [indisponível]",
        (true, false) => " [comprado]",
        (false, true) => " [indisponível]",
        (false, false) => "",
    }
}

/// Add an item to the list.
pub fn add(
    config: &Config,
    name: String,
    brand: String,
    image: String,
    quantity: Decimal,
    price: &str,
    unit: UnitType,
) -> CommandResult {
    let mut store = ItemStore::load(config)?;
    let draft = ItemDraft {
        name,
        brand,
        image,
        quantity,
        unit_price: parse_cents_string(price),
        unit_type: unit,
    };

    match store.add(draft)? {
        Some(id) => tracing::info!("Added item {id}"),
        None => tracing::warn!("Nothing added: item name must not be blank"),
    }
    Ok(())
}

/// Show one page of the (optionally filtered) list.
pub fn list(config: &Config, search: Option<String>, page: usize) -> CommandResult {
    let store = ItemStore::load(config)?;
    let result = list_page(store.items(), &ListQuery { search, page });

    if result.items.is_empty() {
        tracing::info!("No items found.");
        return Ok(());
    }

    for item in &result.items {
        tracing::info!(
            "{}  {}{}{}  {} {} × {} = {}{}",
            item.id,
            item.name,
            if item.brand.is_empty() { "" } else { " / " },
            item.brand,
            item.quantity,
            item.unit_type,
            format_brl(item.unit_price),
            format_brl(item.total()),
            status_tags(item),
        );
    }
    tracing::info!(
        "Page {}/{}, {} item(s) matched",
        result.page,
        result.total_pages,
        result.total_matched
    );
    tracing::info!("Total (available items): {}", format_brl(store.grand_total()));
    Ok(())
}

/// Replace an item's fields.
#[allow(clippy::too_many_arguments)]
pub fn edit(
    config: &Config,
    id: &str,
    name: String,
    brand: String,
    image: String,
    quantity: Decimal,
    price: &str,
    unit: UnitType,
) -> CommandResult {
    let mut store = ItemStore::load(config)?;
    let fields = ItemDraft {
        name,
        brand,
        image,
        quantity,
        unit_price: parse_cents_string(price),
        unit_type: unit,
    };

    let changed = store.update(
        &ItemId::new(id),
        feira_store::models::ItemPatch::SetFields(fields),
    )?;
    if changed {
        tracing::info!("Updated item {id}");
    } else {
        tracing::warn!("No change: unknown id or blank name");
    }
    Ok(())
}

/// Set the purchased flag.
pub fn set_purchased(config: &Config, id: &str, value: bool) -> CommandResult {
    let mut store = ItemStore::load(config)?;
    if store.set_purchased(&ItemId::new(id), value)? {
        tracing::info!("Item {id}: purchased = {value}");
    } else {
        tracing::warn!("No item with id {id}");
    }
    Ok(())
}

/// Set the unavailable flag.
pub fn set_unavailable(config: &Config, id: &str, value: bool) -> CommandResult {
    let mut store = ItemStore::load(config)?;
    if store.set_unavailable(&ItemId::new(id), value)? {
        tracing::info!("Item {id}: unavailable = {value}");
    } else {
        tracing::warn!("No item with id {id}");
    }
    Ok(())
}

/// Remove an item.
pub fn remove(config: &Config, id: &str) -> CommandResult {
    let mut store = ItemStore::load(config)?;
    if store.remove(&ItemId::new(id))? {
        tracing::info!("Removed item {id}");
    } else {
        tracing::warn!("No item with id {id}");
    }
    Ok(())
}

/// Show the grand total over available items.
pub fn total(config: &Config) -> CommandResult {
    let store = ItemStore::load(config)?;
    tracing::info!("Total (available items): {}", format_brl(store.grand_total()));
    Ok(())
}

/// Write the export document.
pub fn export(config: &Config, output: Option<PathBuf>) -> CommandResult {
    let store = ItemStore::load(config)?;
    let document = store.export(Utc::now());
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    std::fs::write(&path, document.to_json_pretty()?)?;
    tracing::info!(
        "Exported {} item(s) ({}) to {}",
        document.items.len(),
        format_brl(document.total),
        path.display()
    );
    Ok(())
}
