//! Breadbasket - bread recipe manager and shopping list builder
//!
//! Loads recipes from a plain-text file, keeps a running order of loaves per
//! recipe, and totals the ingredients needed across every ordered recipe.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Recipes, ingredients and the derived shopping list
//! - `storage`: Recipe source parsing and the in-memory recipe store
//! - `services`: Shopping list building and saving
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and command handlers
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust
//! use breadbasket::services::ShoppingListBuilder;
//! use breadbasket::storage::RecipeStore;
//!
//! let mut store: RecipeStore = "Recipe White\nsugar 10\neggs 2\nflour 500\nyeast 7\nbutter 20\n"
//!     .parse()
//!     .unwrap();
//! store.adjust_quantity(0, 3).unwrap();
//!
//! let report = ShoppingListBuilder::new(&store).build().render();
//! assert!(report.contains("3 White loaf/loaves."));
//! assert!(report.contains("1500.0 grams of flour"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BreadError, BreadResult};
