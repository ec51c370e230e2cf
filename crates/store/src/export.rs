//! Shopping-list export document.
//!
//! Matches the JSON document the web version offers as a download: an
//! `exportedAt` timestamp, the aggregate total, and the full item records
//! each with their own line total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use feira_core::{CurrencyCode, ItemId, UnitType};

use crate::models::ShoppingItem;

/// Default file name for the exported document.
pub const DEFAULT_EXPORT_FILE: &str = "lista-compras.json";

/// The exported shopping list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub exported_at: DateTime<Utc>,
    pub currency: CurrencyCode,
    /// Aggregate total; excludes unavailable items.
    pub total: Decimal,
    pub items: Vec<ExportedItem>,
}

/// One exported item: the full record plus its line total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedItem {
    pub id: ItemId,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub unit_type: UnitType,
    pub purchased: bool,
    pub unavailable: bool,
    /// Per-item total is the plain `quantity * unitPrice` product - it does
    /// NOT honor the unavailable flag; only the aggregate does. The record
    /// stays complete, the aggregate reflects what will actually be spent.
    pub total: Decimal,
}

impl From<&ShoppingItem> for ExportedItem {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            brand: item.brand.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            unit_type: item.unit_type,
            purchased: item.purchased,
            unavailable: item.unavailable,
            total: item.total(),
        }
    }
}

impl ExportDocument {
    /// Build the document from a list snapshot.
    #[must_use]
    pub fn build(items: &[ShoppingItem], exported_at: DateTime<Utc>) -> Self {
        Self {
            exported_at,
            currency: CurrencyCode::Brl,
            total: items
                .iter()
                .filter(|item| !item.unavailable)
                .map(ShoppingItem::total)
                .sum(),
            items: items.iter().map(ExportedItem::from).collect(),
        }
    }

    /// Pretty-printed JSON, as the web version writes the download.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
