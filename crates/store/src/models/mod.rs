//! Domain records for the shopping list and the cart.

pub mod cart;
pub mod item;

pub use cart::CartLine;
pub use item::{FALLBACK_IMAGE, ItemDraft, ItemPatch, ShoppingItem, image_or_fallback};
