//! Recipe model
//!
//! A recipe is a named formula of five ingredient amounts plus the number of
//! loaves currently ordered.

use std::fmt;

use super::ingredient::Ingredient;

/// A bread recipe with its per-loaf ingredient amounts
///
/// Name and amounts are fixed once built; only the ordered quantity changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Recipe name (not required to be unique)
    name: String,

    sugar: f64,
    eggs: f64,
    flour: f64,
    yeast: f64,
    butter: f64,

    /// Number of loaves ordered
    quantity: u32,
}

/// Outcome of adjusting a recipe's ordered quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// A reduction was requested but nothing had been ordered
    AlreadyZero,
    /// The reduction exceeded the order, so it was cleared
    ClampedToZero { previous: u32 },
    /// The delta was applied as requested
    Applied { previous: u32, current: u32 },
}

impl Recipe {
    /// Create a new recipe with nothing ordered
    pub fn new(
        name: impl Into<String>,
        sugar: f64,
        eggs: f64,
        flour: f64,
        yeast: f64,
        butter: f64,
    ) -> Self {
        Self {
            name: name.into(),
            sugar,
            eggs,
            flour,
            yeast,
            butter,
            quantity: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sugar per loaf, in grams
    pub fn sugar(&self) -> f64 {
        self.sugar
    }

    /// Eggs per loaf
    pub fn eggs(&self) -> f64 {
        self.eggs
    }

    /// Flour per loaf, in grams
    pub fn flour(&self) -> f64 {
        self.flour
    }

    /// Yeast per loaf, in grams
    pub fn yeast(&self) -> f64 {
        self.yeast
    }

    /// Butter per loaf, in grams
    pub fn butter(&self) -> f64 {
        self.butter
    }

    /// Per-loaf amount of an ingredient
    pub fn amount(&self, ingredient: Ingredient) -> f64 {
        match ingredient {
            Ingredient::Sugar => self.sugar,
            Ingredient::Eggs => self.eggs,
            Ingredient::Flour => self.flour,
            Ingredient::Yeast => self.yeast,
            Ingredient::Butter => self.butter,
        }
    }

    /// Number of loaves ordered
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Check if any loaves are ordered
    pub fn is_ordered(&self) -> bool {
        self.quantity > 0
    }

    /// Add `delta` loaves to the order, never going below zero
    pub fn adjust_quantity(&mut self, delta: i64) -> QuantityChange {
        let previous = self.quantity;

        if delta < 0 && previous == 0 {
            return QuantityChange::AlreadyZero;
        }

        let target = i64::from(previous).saturating_add(delta);
        if target < 0 {
            self.quantity = 0;
            return QuantityChange::ClampedToZero { previous };
        }

        self.quantity = u32::try_from(target).unwrap_or(u32::MAX);
        QuantityChange::Applied {
            previous,
            current: self.quantity,
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
