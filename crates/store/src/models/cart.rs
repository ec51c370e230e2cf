//! Cart line records.

use feira_core::{ItemId, discount_percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> Decimal {
    Decimal::ONE
}

/// A cart entry referencing a catalog product.
///
/// `unit_price` is the immutable reference price copied from the product;
/// `paid_price` is the user-editable override used for discount tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Id of the source product (the shopping-list item).
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image: String,
    /// Original price, kept fixed for comparison.
    #[serde(default)]
    pub unit_price: Decimal,
    /// What was actually paid; falls back to `unit_price` when absent.
    #[serde(default)]
    pub paid_price: Option<Decimal>,
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
}

impl CartLine {
    /// The price that counts towards totals.
    #[must_use]
    pub fn effective_paid_price(&self) -> Decimal {
        self.paid_price.unwrap_or(self.unit_price)
    }

    /// Line total: effective paid price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.effective_paid_price() * self.quantity
    }

    /// Discount of the paid price relative to the original price, in percent.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        discount_percent(self.unit_price, self.effective_paid_price())
    }
}
