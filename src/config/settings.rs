//! User settings for Breadbasket
//!
//! Manages where recipes are read from, where shopping lists are saved, and
//! how the save prompt behaves.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BreadPaths;
use crate::error::BreadError;

/// User settings for Breadbasket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Recipe source file, relative paths resolve against the working directory
    #[serde(default = "default_recipe_file")]
    pub recipe_file: PathBuf,

    /// Where shopping lists are saved
    #[serde(default = "default_shopping_list_file")]
    pub shopping_list_file: PathBuf,

    /// Answer used when the save prompt is left blank
    #[serde(default = "default_save_by_default")]
    pub save_by_default: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_recipe_file() -> PathBuf {
    PathBuf::from("recipelist.txt")
}

fn default_shopping_list_file() -> PathBuf {
    PathBuf::from("shoppinglist.txt")
}

fn default_save_by_default() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            recipe_file: default_recipe_file(),
            shopping_list_file: default_shopping_list_file(),
            save_by_default: default_save_by_default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &BreadPaths) -> Result<Self, BreadError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BreadError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BreadError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Resolve settings when the config directory may be unknown
    ///
    /// Without a config directory there is no settings file to read, so the
    /// defaults apply.
    pub fn resolve(paths: Option<&BreadPaths>) -> Result<Self, BreadError> {
        match paths {
            Some(paths) => Self::load_or_create(paths),
            None => Ok(Settings::default()),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BreadPaths) -> Result<(), BreadError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BreadError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BreadError::Io(format!("Failed to write settings file: {}", e)))
    }
}
