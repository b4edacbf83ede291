//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging the clap argument parsing with the service layer.

pub mod menu;
pub mod prompt;
pub mod recipe;

pub use menu::{MenuAction, MenuOptions, MenuSession};
pub use prompt::Prompter;
pub use recipe::handle_recipes_command;
