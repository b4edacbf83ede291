//! Custom error types for Breadbasket
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Breadbasket operations
#[derive(Error, Debug)]
pub enum BreadError {
    /// Malformed recipe source
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A recipe selection outside the loaded collection
    #[error("Recipe not found: index {index} (have {count} recipes)")]
    RecipeNotFound { index: usize, count: usize },

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BreadError {
    /// Create a parse error for the given 1-based line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a "not found" error for a recipe index
    pub fn recipe_not_found(index: usize, count: usize) -> Self {
        Self::RecipeNotFound { index, count }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BreadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BreadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Breadbasket operations
pub type BreadResult<T> = Result<T, BreadError>;
