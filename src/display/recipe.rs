//! Recipe display formatting
//!
//! Formats recipes for terminal output in numbered, table and detail views.

use crate::models::{QuantityChange, Recipe};

/// Format recipes as a numbered pick list, starting at 1
pub fn format_recipe_menu(recipes: &[Recipe]) -> String {
    let mut output = String::from("Available Recipes:\n");
    for (index, recipe) in recipes.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, recipe.name()));
    }
    output
}

/// Format recipes with their per-loaf amounts as a table
pub fn format_recipe_table(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.".to_string();
    }

    let name_width = recipes
        .iter()
        .map(|r| r.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>8}  {:>6}  {:>8}  {:>8}  {:>8}  {:>7}\n",
        "#",
        "Name",
        "Sugar",
        "Eggs",
        "Flour",
        "Yeast",
        "Butter",
        "Ordered",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<3}  {:-<name_width$}  {:->8}  {:->6}  {:->8}  {:->8}  {:->8}  {:->7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (index, recipe) in recipes.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>8.1}  {:>6.1}  {:>8.1}  {:>8.1}  {:>8.1}  {:>7}\n",
            index + 1,
            recipe.name(),
            recipe.sugar(),
            recipe.eggs(),
            recipe.flour(),
            recipe.yeast(),
            recipe.butter(),
            recipe.quantity(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single recipe's details
pub fn format_recipe_details(recipe: &Recipe) -> String {
    format!(
        "Recipe: {}\nSugar: {:.1}\nEggs: {:.1}\nFlour: {:.1}\nYeast: {:.1}\nButter: {:.1}\nQuantity Ordered: {}",
        recipe.name(),
        recipe.sugar(),
        recipe.eggs(),
        recipe.flour(),
        recipe.yeast(),
        recipe.butter(),
        recipe.quantity()
    )
}

/// Describe the outcome of an order adjustment for the user
pub fn format_quantity_change(name: &str, delta: i64, change: QuantityChange) -> String {
    match change {
        QuantityChange::AlreadyZero => format!(
            "Invalid quantity. Cannot reduce quantity of {} because no loaves have been ordered.",
            name
        ),
        QuantityChange::ClampedToZero { .. } => {
            format!("Quantity reduced to 0 for {}. No loaves remaining.", name)
        }
        QuantityChange::Applied { current, .. } if delta < 0 => format!(
            "Quantity reduced by {} for {}. Total: {} loaf/loaves.",
            delta.unsigned_abs(),
            name,
            current
        ),
        QuantityChange::Applied { current, .. } => format!(
            "{} loaf/loaves of {} added. Total: {} loaf/loaves.",
            delta, name, current
        ),
    }
}
