//! Feira Store - persistent shopping-list and cart stores.
//!
//! This crate owns all state: the canonical shopping-list collection, the
//! product catalog derived from it, and the cart. Collections live as JSON
//! files in a data directory and are rewritten whole after every mutation,
//! mirroring the web version's local-storage model.
//!
//! # Modules
//!
//! - [`items`] - The shopping-list [`items::ItemStore`] (load, seed merge, CRUD, export)
//! - [`catalog`] - Read-only product catalog derived from the list
//! - [`cart`] - The [`cart::CartStore`] with paid-price overrides
//! - [`query`] - List-page search and pagination
//! - [`storage`] - Fail-soft JSON collection persistence
//! - [`events`] - Change notifications for rendering layers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod items;
pub mod models;
pub mod query;
pub mod seed;
pub mod storage;

pub use cart::CartStore;
pub use config::Config;
pub use error::StorageError;
pub use items::ItemStore;
