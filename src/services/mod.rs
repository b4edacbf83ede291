//! Service layer for Breadbasket
//!
//! The service layer provides business logic on top of the recipe store.

pub mod shopping;

pub use shopping::ShoppingListBuilder;
