//! Read-only product catalog derived from the shopping list.
//!
//! The catalog holds no state of its own: it is recomputed from the item
//! store's persisted snapshot whenever the store page loads. Unavailable
//! items never appear as products.

use feira_core::ItemId;
use rust_decimal::Decimal;

use crate::models::{CartLine, ShoppingItem};

/// A catalog entry: the sellable view of a shopping-list item.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub unit_price: Decimal,
    pub quantity: Decimal,
}

impl From<&ShoppingItem> for Product {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            brand: item.brand.clone(),
            image: item.image.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

/// Derive the catalog from a list snapshot, preserving item order.
#[must_use]
pub fn derive_catalog(items: &[ShoppingItem]) -> Vec<Product> {
    items
        .iter()
        .filter(|item| !item.unavailable)
        .map(Product::from)
        .collect()
}

/// Case-insensitive name/brand substring filter over products.
#[must_use]
pub fn search_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.brand.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Whether a product already has a cart line (the "Comprar" button state).
#[must_use]
pub fn is_in_cart(cart: &[CartLine], id: &ItemId) -> bool {
    cart.iter().any(|line| &line.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, unavailable: bool) -> ShoppingItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id,
            "unavailable": unavailable,
        }))
        .unwrap()
    }

    #[test]
    fn test_catalog_excludes_unavailable_preserving_order() {
        let items = vec![item("a", false), item("b", true), item("c", false)];
        let catalog = derive_catalog(&items);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_search_products() {
        let items = vec![item("Arroz", false), item("Feijão", false)];
        let catalog = derive_catalog(&items);
        assert_eq!(search_products(&catalog, "arr").len(), 1);
        assert_eq!(search_products(&catalog, "").len(), 2);
    }
}
