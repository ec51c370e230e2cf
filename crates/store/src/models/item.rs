//! Shopping-list item records.

use feira_core::{ItemId, UnitType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder stored whenever an item has no usable image reference.
pub const FALLBACK_IMAGE: &str = "assets/img/image_not_available.png";

/// Replace a blank image reference with the placeholder.
///
/// An item's `image` field is never stored empty.
#[must_use]
pub fn image_or_fallback(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FALLBACK_IMAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A user-managed shopping-list entry.
///
/// Field names on the wire are camelCase (`unitPrice`, `unitType`) so
/// collections written by the web version load unchanged. Most
/// fields default when absent - seed records routinely omit the status flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Unique, stable identifier.
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    /// Image reference; blank values are normalized to [`FALLBACK_IMAGE`].
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default)]
    pub unit_type: UnitType,
    /// The item has been bought.
    #[serde(default)]
    pub purchased: bool,
    /// The item could not be found; independent of `purchased`.
    #[serde(default)]
    pub unavailable: bool,
}

impl ShoppingItem {
    /// Line total: `quantity * unit_price`, regardless of status flags.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Form input for creating an item or replacing an existing item's fields.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub brand: String,
    pub image: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub unit_type: UnitType,
}

/// A typed patch applied to a single item.
///
/// The flag variants back the inline list-page toggles; `SetFields` backs the
/// edit form, which always submits the full field set.
#[derive(Debug, Clone)]
pub enum ItemPatch {
    SetPurchased(bool),
    SetUnavailable(bool),
    SetFields(ItemDraft),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_or_fallback() {
        assert_eq!(image_or_fallback("  "), FALLBACK_IMAGE);
        assert_eq!(image_or_fallback(""), FALLBACK_IMAGE);
        assert_eq!(image_or_fallback(" x.png "), "x.png");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let item = ShoppingItem {
            id: ItemId::new("a1"),
            name: "Arroz".to_string(),
            brand: String::new(),
            image: FALLBACK_IMAGE.to_string(),
            quantity: Decimal::from(5u32),
            unit_price: Decimal::new(450, 2),
            unit_type: UnitType::Weight,
            purchased: false,
            unavailable: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unitPrice"], serde_json::json!(4.5));
        assert_eq!(json["unitType"], serde_json::json!("kg"));
    }

    #[test]
    fn test_seed_record_defaults() {
        // Records from seed files omit the status flags
        let item: ShoppingItem = serde_json::from_str(
            r#"{"id": "a1", "name": "Arroz", "quantity": 5, "unitPrice": 4.5, "unitType": "kg"}"#,
        )
        .unwrap();
        assert!(!item.purchased);
        assert!(!item.unavailable);
        assert_eq!(item.brand, "");
        assert_eq!(item.total(), Decimal::new(2250, 2));
    }
}
