//! Command implementations, one module per page: list, store, cart.

pub mod cart;
pub mod items;
pub mod store;
