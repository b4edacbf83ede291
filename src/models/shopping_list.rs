//! Shopping list model
//!
//! A shopping list is derived on demand from the recipes that currently have
//! loaves ordered. It is never stored except as the rendered report text.

use std::fmt;

use super::ingredient::Ingredient;
use super::recipe::Recipe;

/// One ordered recipe on the shopping list
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

/// Aggregated ingredient totals across all ordered recipes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    /// Ordered recipes, in load order
    pub lines: Vec<OrderLine>,

    /// Non-zero ingredient totals, in report order
    pub totals: Vec<(Ingredient, f64)>,
}

impl ShoppingList {
    /// Aggregate the recipes that have loaves ordered
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut lines = Vec::new();
        let mut sums = [0.0_f64; 5];

        for recipe in recipes.iter().filter(|r| r.is_ordered()) {
            let quantity = recipe.quantity();
            lines.push(OrderLine {
                name: recipe.name().to_string(),
                quantity,
            });

            for (sum, ingredient) in sums.iter_mut().zip(Ingredient::REPORT_ORDER) {
                *sum += recipe.amount(ingredient) * f64::from(quantity);
            }
        }

        let totals = Ingredient::REPORT_ORDER
            .into_iter()
            .zip(sums)
            .filter(|(_, total)| *total != 0.0)
            .collect();

        Self { lines, totals }
    }

    /// Total amount of an ingredient, if any is needed
    pub fn total(&self, ingredient: Ingredient) -> Option<f64> {
        self.totals
            .iter()
            .find(|(i, _)| *i == ingredient)
            .map(|(_, total)| *total)
    }

    /// Check if nothing has been ordered
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total loaves across all order lines
    pub fn total_loaves(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Render the report text exactly as it is shown and saved
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Suffix is literal regardless of count
        write!(f, "{} {} loaf/loaves.", self.quantity, self.name)
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shopping List:")?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }

        writeln!(f)?;
        writeln!(f, "You will need a total of:")?;
        for (ingredient, total) in &self.totals {
            writeln!(f, "{}", ingredient.format_amount(*total))?;
        }

        Ok(())
    }
}
