//! Recipe source parser
//!
//! Reads the line-oriented recipe format:
//!
//! ```text
//! Recipe White
//! sugar 10
//! eggs 2
//! flour 500
//! yeast 7
//! butter 20
//! ```
//!
//! Every `Recipe <name>` header must be followed by exactly five ingredient
//! lines. Blank lines are ignored anywhere, and text outside a block is
//! skipped.

use std::io::BufRead;

use crate::error::{BreadError, BreadResult};
use crate::models::{Ingredient, Recipe};

const HEADER_KEYWORD: &str = "Recipe";
const INGREDIENT_LINES: usize = 5;

/// Parse every recipe block from a reader, in source order
pub fn parse_recipes<R: BufRead>(reader: R) -> BreadResult<Vec<Recipe>> {
    let mut recipes = Vec::new();
    let mut lines = reader.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line = line?;
        let trimmed = line.trim();
        let line_no = index + 1;

        let Some(name) = header_name(trimmed) else {
            if !trimmed.is_empty() {
                tracing::debug!(line = line_no, "skipping text outside a recipe block");
            }
            continue;
        };

        if name.is_empty() {
            return Err(BreadError::parse(line_no, "recipe header has no name"));
        }

        let mut amounts = [0.0_f64; INGREDIENT_LINES];
        let mut seen = 0;

        while seen < INGREDIENT_LINES {
            let Some((index, line)) = lines.next() else {
                return Err(BreadError::parse(
                    line_no,
                    format!(
                        "recipe '{}' ends after {} of {} ingredient lines",
                        name, seen, INGREDIENT_LINES
                    ),
                ));
            };
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            if header_name(trimmed).is_some() {
                return Err(BreadError::parse(
                    index + 1,
                    format!(
                        "recipe '{}' has only {} of {} ingredient lines",
                        name, seen, INGREDIENT_LINES
                    ),
                ));
            }

            let (ingredient, amount) = parse_ingredient_line(trimmed, index + 1)?;
            amounts[slot(ingredient)] = amount;
            seen += 1;
        }

        let [sugar, eggs, flour, yeast, butter] = amounts;
        tracing::debug!(recipe = name, "parsed recipe");
        recipes.push(Recipe::new(name, sugar, eggs, flour, yeast, butter));
    }

    Ok(recipes)
}

/// Return the recipe name if the line is a `Recipe <name>` header
fn header_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(HEADER_KEYWORD)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

fn parse_ingredient_line(line: &str, line_no: usize) -> BreadResult<(Ingredient, f64)> {
    let mut parts = line.split_whitespace();

    let (Some(name), Some(raw_amount), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BreadError::parse(
            line_no,
            format!("expected '<ingredient> <amount>', found '{}'", line),
        ));
    };

    let ingredient: Ingredient = name
        .parse()
        .map_err(|e: String| BreadError::parse(line_no, e))?;

    let amount: f64 = raw_amount.parse().map_err(|_| {
        BreadError::parse(
            line_no,
            format!("amount '{}' for {} is not a number", raw_amount, ingredient),
        )
    })?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(BreadError::parse(
            line_no,
            format!(
                "amount '{}' for {} must be a non-negative number",
                raw_amount, ingredient
            ),
        ));
    }

    Ok((ingredient, amount))
}

fn slot(ingredient: Ingredient) -> usize {
    match ingredient {
        Ingredient::Sugar => 0,
        Ingredient::Eggs => 1,
        Ingredient::Flour => 2,
        Ingredient::Yeast => 3,
        Ingredient::Butter => 4,
    }
}
