//! Feira Core - Shared types library.
//!
//! This crate provides common types used across all Feira components:
//! - `store` - Persistent shopping-list and cart stores
//! - `cli` - Command-line surface for the list, catalog, and cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! persistence, no environment access. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, currency parsing/formatting, measurement units

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
