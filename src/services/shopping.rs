//! Shopping list service
//!
//! Builds the shopping list from the store's current orders and persists the
//! rendered report.

use std::path::Path;

use crate::error::BreadResult;
use crate::models::ShoppingList;
use crate::storage::{write_text, RecipeStore};

/// Service for building and saving shopping lists
pub struct ShoppingListBuilder<'a> {
    store: &'a RecipeStore,
}

impl<'a> ShoppingListBuilder<'a> {
    /// Create a new shopping list builder
    pub fn new(store: &'a RecipeStore) -> Self {
        Self { store }
    }

    /// Build a shopping list from the current order quantities
    pub fn build(&self) -> ShoppingList {
        let list = ShoppingList::from_recipes(self.store.list());
        tracing::debug!(
            recipes = list.lines.len(),
            loaves = list.total_loaves(),
            "built shopping list"
        );
        list
    }

    /// Write a rendered report to `destination`
    ///
    /// The file is rewritten in place, keeping its identity: symlinks still
    /// point at the same target and permissions are left as they were.
    pub fn persist(report: &str, destination: &Path) -> BreadResult<()> {
        write_text(destination, report).inspect_err(|e| {
            tracing::error!(path = %destination.display(), error = %e, "failed to save shopping list");
        })?;

        tracing::info!(path = %destination.display(), "saved shopping list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use tempfile::TempDir;

    fn white_store() -> RecipeStore {
        "Recipe White\nsugar 10\neggs 2\nflour 500\nyeast 7\nbutter 20\n"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_build_reflects_store() {
        let mut store = white_store();
        assert!(ShoppingListBuilder::new(&store).build().is_empty());

        store.adjust_quantity(0, 3).unwrap();
        let list = ShoppingListBuilder::new(&store).build();

        assert_eq!(list.lines[0].to_string(), "3 White loaf/loaves.");
        let order: Vec<_> = list.totals.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, Ingredient::REPORT_ORDER.to_vec());
        assert_eq!(list.total(Ingredient::Yeast), Some(21.0));
        assert_eq!(list.total(Ingredient::Flour), Some(1500.0));
        assert_eq!(list.total(Ingredient::Sugar), Some(30.0));
        assert_eq!(list.total(Ingredient::Eggs), Some(6.0));
        assert_eq!(list.total(Ingredient::Butter), Some(60.0));
    }

    #[test]
    fn test_persist_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shoppinglist.txt");

        let mut store = white_store();
        store.adjust_quantity(0, 2).unwrap();
        let report = ShoppingListBuilder::new(&store).build().render();

        ShoppingListBuilder::persist(&report, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
    }

    #[test]
    fn test_persist_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = ShoppingListBuilder::persist("Shopping List:\n", &blocker.join("list.txt"))
            .unwrap_err();
        assert!(matches!(err, crate::error::BreadError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_persist_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("shared").join("groceries.txt");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "").unwrap();
        let link = temp_dir.path().join("shoppinglist.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        ShoppingListBuilder::persist("Shopping List:\n", &link).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "Shopping List:\n");
        assert!(std::fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
    }
}
