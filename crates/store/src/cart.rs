//! The cart store.
//!
//! Cart lines reference catalog products by id and carry their own quantity
//! and paid-price override. The collection persists independently of the
//! shopping list, under its own file.

use std::path::PathBuf;

use rust_decimal::Decimal;

use feira_core::ItemId;
use feira_core::parse_cents_string;

use crate::catalog::Product;
use crate::config::Config;
use crate::error::Result;
use crate::events::{EventBus, StoreEvent};
use crate::models::CartLine;
use crate::storage;

/// The persistent cart store.
pub struct CartStore {
    lines: Vec<CartLine>,
    path: PathBuf,
    bus: EventBus,
}

impl CartStore {
    /// Load the persisted cart; empty on absence or malformed content.
    #[must_use]
    pub fn load(config: &Config) -> Self {
        Self::open(config.cart_path())
    }

    /// Open a cart store at an explicit path.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lines = storage::read_collection(&path);
        Self {
            lines,
            path,
            bus: EventBus::new(),
        }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Register a subscriber notified after every persisted mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreEvent) + Send + 'static) {
        self.bus.subscribe(subscriber);
    }

    /// Add a product to the cart.
    ///
    /// Defaults to the product's list quantity when positive, else 1. An
    /// existing line for the same product accumulates quantity instead of
    /// duplicating; a new line starts with `paid_price` equal to the
    /// product's unit price.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity_to_add: Option<Decimal>,
    ) -> Result<()> {
        let requested = quantity_to_add.unwrap_or(product.quantity);
        let quantity = if requested > Decimal::ZERO {
            requested
        } else {
            Decimal::ONE
        };

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                id: product.id.clone(),
                name: product.name.clone(),
                brand: product.brand.clone(),
                image: product.image.clone(),
                unit_price: product.unit_price,
                paid_price: Some(product.unit_price),
                quantity,
            });
        }
        self.persist_and_notify()
    }

    /// Set a line's quantity from raw input.
    ///
    /// Invalid or non-numeric input is treated as 1, and the effective value
    /// is floored at 1. Returns `false` when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn set_quantity(&mut self, id: &ItemId, raw: &str) -> Result<bool> {
        let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) else {
            return Ok(false);
        };
        let parsed = raw.trim().parse::<Decimal>().unwrap_or(Decimal::ONE);
        line.quantity = parsed.max(Decimal::ONE);
        self.persist_and_notify()?;
        Ok(true)
    }

    /// Set a line's paid price from raw currency-masked input.
    ///
    /// Parsing follows [`parse_cents_string`]: digits only, last two digits
    /// are centavos, no digits at all means zero. Returns `false` when the
    /// id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn set_paid_price(&mut self, id: &ItemId, raw: &str) -> Result<bool> {
        let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) else {
            return Ok(false);
        };
        line.paid_price = Some(parse_cents_string(raw));
        self.persist_and_notify()?;
        Ok(true)
    }

    /// Delete a line. Returns `false` when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn remove(&mut self, id: &ItemId) -> Result<bool> {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        if self.lines.len() == before {
            return Ok(false);
        }
        self.persist_and_notify()?;
        Ok(true)
    }

    /// Empty the whole cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.persist_and_notify()
    }

    /// Cart total: effective paid price times quantity, summed over lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of line quantities (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> Decimal {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    fn persist_and_notify(&self) -> Result<()> {
        storage::write_collection(&self.path, &self.lines)?;
        self.bus.emit(&StoreEvent::CartChanged {
            lines: self.lines.len(),
            item_count: self.item_count(),
            total: self.total(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: Decimal, quantity: Decimal) -> Product {
        Product {
            id: ItemId::new(id),
            name: id.to_string(),
            brand: String::new(),
            image: String::new(),
            unit_price: price,
            quantity,
        }
    }

    fn cart() -> (tempfile::TempDir, CartStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(dir.path().join("cart.json"));
        (dir, store)
    }

    #[test]
    fn test_add_same_product_accumulates_quantity() {
        let (_dir, mut store) = cart();
        let p = product("p1", Decimal::from(10u32), Decimal::ONE);
        store.add_product(&p, Some(Decimal::ONE)).unwrap();
        store.add_product(&p, Some(Decimal::from(2u32))).unwrap();
        assert_eq!(store.lines().len(), 1);
        assert_eq!(
            store.lines().first().unwrap().quantity,
            Decimal::from(3u32)
        );
    }

    #[test]
    fn test_add_defaults_to_product_quantity_or_one() {
        let (_dir, mut store) = cart();
        store
            .add_product(&product("p1", Decimal::ONE, Decimal::from(4u32)), None)
            .unwrap();
        store
            .add_product(&product("p2", Decimal::ONE, Decimal::ZERO), None)
            .unwrap();
        assert_eq!(
            store.lines().first().unwrap().quantity,
            Decimal::from(4u32)
        );
        assert_eq!(store.lines().last().unwrap().quantity, Decimal::ONE);
    }

    #[test]
    fn test_new_line_paid_price_starts_at_unit_price() {
        let (_dir, mut store) = cart();
        store
            .add_product(&product("p1", Decimal::new(990, 2), Decimal::ONE), None)
            .unwrap();
        let line = store.lines().first().unwrap();
        assert_eq!(line.paid_price, Some(Decimal::new(990, 2)));
    }

    #[test]
    fn test_set_quantity_clamps_invalid_input_to_one() {
        let (_dir, mut store) = cart();
        let p = product("p1", Decimal::ONE, Decimal::ONE);
        store.add_product(&p, None).unwrap();
        let id = ItemId::new("p1");

        store.set_quantity(&id, "-5").unwrap();
        assert_eq!(store.lines().first().unwrap().quantity, Decimal::ONE);

        store.set_quantity(&id, "abc").unwrap();
        assert_eq!(store.lines().first().unwrap().quantity, Decimal::ONE);

        store.set_quantity(&id, "7").unwrap();
        assert_eq!(store.lines().first().unwrap().quantity, Decimal::from(7u32));
    }

    #[test]
    fn test_set_paid_price_parses_cents_string() {
        let (_dir, mut store) = cart();
        store
            .add_product(&product("p1", Decimal::from(10u32), Decimal::ONE), None)
            .unwrap();
        let id = ItemId::new("p1");

        store.set_paid_price(&id, "500").unwrap();
        assert_eq!(
            store.lines().first().unwrap().paid_price,
            Some(Decimal::new(500, 2))
        );

        store.set_paid_price(&id, "").unwrap();
        assert_eq!(
            store.lines().first().unwrap().paid_price,
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_total_uses_paid_price_with_unit_price_fallback() {
        let (_dir, mut store) = cart();
        store
            .add_product(&product("p1", Decimal::from(10u32), Decimal::from(2u32)), None)
            .unwrap();
        // paid initialized to unit price: 10 * 2
        assert_eq!(store.total(), Decimal::from(20u32));

        store.set_paid_price(&ItemId::new("p1"), "800").unwrap();
        assert_eq!(store.total(), Decimal::from(16u32));
    }

    #[test]
    fn test_remove_and_clear() {
        let (_dir, mut store) = cart();
        store
            .add_product(&product("p1", Decimal::ONE, Decimal::ONE), None)
            .unwrap();
        store
            .add_product(&product("p2", Decimal::ONE, Decimal::ONE), None)
            .unwrap();

        assert!(store.remove(&ItemId::new("p1")).unwrap());
        assert!(!store.remove(&ItemId::new("p1")).unwrap());
        assert_eq!(store.lines().len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        {
            let mut store = CartStore::open(&path);
            store
                .add_product(&product("p1", Decimal::from(3u32), Decimal::ONE), None)
                .unwrap();
        }
        let store = CartStore::open(&path);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total(), Decimal::from(3u32));
    }

    #[test]
    fn test_events_carry_count_and_total() {
        use std::sync::{Arc, Mutex};

        let (_dir, mut store) = cart();
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            store.subscribe(move |event| seen.lock().unwrap().push(event.clone()));
        }
        store
            .add_product(&product("p1", Decimal::from(5u32), Decimal::from(2u32)), None)
            .unwrap();
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[StoreEvent::CartChanged {
                lines: 1,
                item_count: Decimal::from(2u32),
                total: Decimal::from(10u32),
            }]
        );
    }
}
