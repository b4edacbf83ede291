//! Path management for Breadbasket
//!
//! ## Path Resolution Order
//!
//! 1. `BREADBASKET_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/breadbasket` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::BreadError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "BREADBASKET_DIR";

/// Manages all paths used by Breadbasket
#[derive(Debug, Clone)]
pub struct BreadPaths {
    base_dir: PathBuf,
}

impl BreadPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BreadError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "breadbasket")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BreadError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create BreadPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BreadError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BreadError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
