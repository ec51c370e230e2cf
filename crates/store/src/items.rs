//! The shopping-list item store.
//!
//! Owns the canonical item collection. Every mutation is a synchronous
//! read-modify-write-persist sequence: the collection is rewritten to disk
//! whole, then subscribers are notified. There are no partial updates.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use feira_core::ItemId;

use crate::config::Config;
use crate::error::Result;
use crate::events::{EventBus, StoreEvent};
use crate::export::ExportDocument;
use crate::models::{ItemDraft, ItemPatch, ShoppingItem, image_or_fallback};
use crate::{seed, storage};

/// The persistent shopping-list store.
pub struct ItemStore {
    items: Vec<ShoppingItem>,
    path: PathBuf,
    bus: EventBus,
}

impl ItemStore {
    /// Load the persisted list, merge the seed dataset, and persist the result.
    ///
    /// A missing or malformed collection degrades to an empty list; a missing
    /// or malformed seed file is silently skipped (seed absence is not an
    /// error condition for this store). Existing records are never
    /// overwritten by seed values.
    ///
    /// # Errors
    ///
    /// Returns an error only if the merged collection cannot be written back.
    pub fn load(config: &Config) -> Result<Self> {
        Self::open(config.items_path(), Some(&config.seed_path))
    }

    /// Open a store at an explicit path, optionally merging a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error only if the merged collection cannot be written back.
    pub fn open(path: impl Into<PathBuf>, seed_path: Option<&Path>) -> Result<Self> {
        let path = path.into();
        let mut items: Vec<ShoppingItem> = storage::read_collection(&path);
        for item in &mut items {
            item.image = image_or_fallback(&item.image);
        }

        if let Some(seed_path) = seed_path {
            if let Some(seed) = seed::load(seed_path) {
                let appended = seed::merge(&mut items, seed);
                if appended > 0 {
                    tracing::info!(
                        "merged {appended} seed item(s) from {}",
                        seed_path.display()
                    );
                }
            }
        }

        let store = Self {
            items,
            path,
            bus: EventBus::new(),
        };
        store.persist()?;
        Ok(store)
    }

    /// The current collection, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Register a subscriber notified after every persisted mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreEvent) + Send + 'static) {
        self.bus.subscribe(subscriber);
    }

    /// Add an item from form input.
    ///
    /// A blank name (after trimming) is a silent no-op returning `None`.
    /// Negative quantities and prices are floored at zero, and a blank image
    /// is replaced by the placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn add(&mut self, draft: ItemDraft) -> Result<Option<ItemId>> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let item = ShoppingItem {
            id: ItemId::generate(),
            name: name.to_string(),
            brand: draft.brand.trim().to_string(),
            image: image_or_fallback(&draft.image),
            quantity: draft.quantity.max(Decimal::ZERO),
            unit_price: draft.unit_price.max(Decimal::ZERO),
            unit_type: draft.unit_type,
            purchased: false,
            unavailable: false,
        };
        let id = item.id.clone();
        self.items.push(item);
        self.persist()?;
        self.notify();
        Ok(Some(id))
    }

    /// Apply a typed patch to the matching item.
    ///
    /// Returns `false` (no state change) when the id is absent, or when a
    /// `SetFields` patch carries a blank name.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn update(&mut self, id: &ItemId, patch: ItemPatch) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return Ok(false);
        };

        match patch {
            ItemPatch::SetPurchased(value) => item.purchased = value,
            ItemPatch::SetUnavailable(value) => item.unavailable = value,
            ItemPatch::SetFields(fields) => {
                let name = fields.name.trim();
                if name.is_empty() {
                    return Ok(false);
                }
                item.name = name.to_string();
                item.brand = fields.brand.trim().to_string();
                item.image = image_or_fallback(&fields.image);
                item.quantity = fields.quantity.max(Decimal::ZERO);
                item.unit_price = fields.unit_price.max(Decimal::ZERO);
                item.unit_type = fields.unit_type;
            }
        }

        self.persist()?;
        self.notify();
        Ok(true)
    }

    /// Toggle the purchased flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn set_purchased(&mut self, id: &ItemId, value: bool) -> Result<bool> {
        self.update(id, ItemPatch::SetPurchased(value))
    }

    /// Toggle the unavailable flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn set_unavailable(&mut self, id: &ItemId, value: bool) -> Result<bool> {
        self.update(id, ItemPatch::SetUnavailable(value))
    }

    /// Delete an item. Returns `false` when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn remove(&mut self, id: &ItemId) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        self.notify();
        Ok(true)
    }

    /// Grand total over available items: `quantity * unit_price` summed for
    /// every item with `unavailable == false`. Purchased state is irrelevant.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| !item.unavailable)
            .map(ShoppingItem::total)
            .sum()
    }

    /// Build the export document for the current collection.
    #[must_use]
    pub fn export(&self, exported_at: DateTime<Utc>) -> ExportDocument {
        ExportDocument::build(&self.items, exported_at)
    }

    fn persist(&self) -> Result<()> {
        storage::write_collection(&self.path, &self.items)
    }

    fn notify(&self) {
        self.bus.emit(&StoreEvent::ItemsChanged {
            count: self.items.len(),
        });
    }
}
