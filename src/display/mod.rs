//! Display formatting for terminal output

pub mod recipe;

pub use recipe::{
    format_quantity_change, format_recipe_details, format_recipe_menu, format_recipe_table,
};
