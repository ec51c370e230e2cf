//! Core types for Feira.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod unit;

pub use id::*;
pub use money::{CurrencyCode, discount_percent, format_brl, parse_cents_string};
pub use unit::UnitType;
