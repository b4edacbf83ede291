//! Recipe listing command
//!
//! Prints the loaded recipes without entering the interactive menu.

use std::io::Write;

use crate::display::{format_recipe_details, format_recipe_table};
use crate::error::BreadResult;
use crate::storage::RecipeStore;

/// Print every recipe as a table, or in full detail when `details` is set
pub fn handle_recipes_command<W: Write>(
    store: &RecipeStore,
    details: bool,
    out: &mut W,
) -> BreadResult<()> {
    if !details {
        write!(out, "{}", format_recipe_table(store.list()))?;
        if store.is_empty() {
            writeln!(out)?;
        }
        return Ok(());
    }

    if store.is_empty() {
        writeln!(out, "No recipes found.")?;
        return Ok(());
    }

    for (index, recipe) in store.list().iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", format_recipe_details(recipe))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(store: &RecipeStore, details: bool) -> String {
        let mut out = Vec::new();
        handle_recipes_command(store, details, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_listing() {
        let store: RecipeStore = "Recipe White\nsugar 10\neggs 2\nflour 500\nyeast 7\nbutter 20\n"
            .parse()
            .unwrap();
        let out = render(&store, false);
        assert!(out.contains("White"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_detail_listing() {
        let store: RecipeStore = "Recipe A\nsugar 1\neggs 1\nflour 1\nyeast 1\nbutter 1\n\
                                  Recipe B\nsugar 2\neggs 2\nflour 2\nyeast 2\nbutter 2\n"
            .parse()
            .unwrap();
        let out = render(&store, true);
        assert!(out.contains("Recipe: A\n"));
        assert!(out.contains("Quantity Ordered: 0\n\nRecipe: B\n"));
    }

    #[test]
    fn test_empty_store() {
        assert_eq!(render(&RecipeStore::default(), false), "No recipes found.\n");
        assert_eq!(render(&RecipeStore::default(), true), "No recipes found.\n");
    }
}
