//! Storage layer for Breadbasket
//!
//! Loads recipes from the plain-text recipe source and writes text files.

pub mod file_io;
pub mod parser;
pub mod recipes;

pub use file_io::{open_text, write_text};
pub use parser::parse_recipes;
pub use recipes::RecipeStore;
