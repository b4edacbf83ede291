//! Configuration module for Breadbasket
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BreadPaths;
pub use settings::Settings;
