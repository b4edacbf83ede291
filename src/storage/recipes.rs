//! Recipe store
//!
//! Owns the ordered collection of recipes loaded at startup. Recipes are
//! never added or removed after loading; only their ordered quantity changes.

use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use crate::error::{BreadError, BreadResult};
use crate::models::{QuantityChange, Recipe};

use super::file_io::open_text;
use super::parser::parse_recipes;

/// In-memory store of recipes, in load order
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Create a store over already-built recipes
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load recipes from a file
    pub fn load<P: AsRef<Path>>(path: P) -> BreadResult<Self> {
        let path = path.as_ref();
        let reader = open_text(path)?;

        let store = Self::from_reader(reader)?;

        tracing::info!(
            path = %path.display(),
            count = store.len(),
            "loaded recipes"
        );
        Ok(store)
    }

    /// Load recipes from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> BreadResult<Self> {
        Ok(Self::new(parse_recipes(reader)?))
    }

    /// All recipes, in load order
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Get a recipe by zero-based index
    pub fn get(&self, index: usize) -> BreadResult<&Recipe> {
        self.recipes
            .get(index)
            .ok_or_else(|| BreadError::recipe_not_found(index, self.recipes.len()))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Add `delta` loaves to the recipe at `index`, clamping at zero
    pub fn adjust_quantity(&mut self, index: usize, delta: i64) -> BreadResult<QuantityChange> {
        let count = self.recipes.len();
        let recipe = self
            .recipes
            .get_mut(index)
            .ok_or_else(|| BreadError::recipe_not_found(index, count))?;

        let change = recipe.adjust_quantity(delta);
        tracing::debug!(
            recipe = recipe.name(),
            delta,
            quantity = recipe.quantity(),
            ?change,
            "adjusted order quantity"
        );
        Ok(change)
    }
}

impl FromStr for RecipeStore {
    type Err = BreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
