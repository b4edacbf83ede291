//! Core data models for Breadbasket
//!
//! Recipes, the ingredients they are made of, and the shopping list derived
//! from the current orders.

pub mod ingredient;
pub mod recipe;
pub mod shopping_list;

pub use ingredient::{Ingredient, Unit};
pub use recipe::{QuantityChange, Recipe};
pub use shopping_list::{OrderLine, ShoppingList};
