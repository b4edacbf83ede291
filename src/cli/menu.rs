//! Interactive menu
//!
//! A plain dispatch loop over [`MenuAction`]. Bad input is re-prompted, a
//! failed save is reported and the loop carries on, and closing stdin quits.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use crate::display::{format_quantity_change, format_recipe_menu};
use crate::error::{BreadError, BreadResult};
use crate::services::ShoppingListBuilder;
use crate::storage::RecipeStore;

use super::prompt::Prompter;

/// Actions offered by the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ReprintMenu,
    ShowRecipes,
    AdjustOrder,
    PrintShoppingList,
    Quit,
}

impl MenuAction {
    /// All actions, in menu number order
    pub const ALL: [MenuAction; 5] = [
        MenuAction::ReprintMenu,
        MenuAction::ShowRecipes,
        MenuAction::AdjustOrder,
        MenuAction::PrintShoppingList,
        MenuAction::Quit,
    ];

    pub fn from_choice(choice: i64) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ReprintMenu => "to reprint this menu.",
            Self::ShowRecipes => "Show available recipes.",
            Self::AdjustOrder => "Create shopping list.",
            Self::PrintShoppingList => "Print and save shopping list.",
            Self::Quit => "Quit program.",
        }
    }
}

/// Settings the menu needs beyond the recipes themselves
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// Where the shopping list is saved
    pub shopping_list_file: PathBuf,
    /// Answer used when the save prompt is left blank
    pub save_by_default: bool,
}

/// One interactive session over a recipe store
pub struct MenuSession<'a, R, W> {
    store: &'a mut RecipeStore,
    prompter: Prompter<R, W>,
    options: MenuOptions,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(store: &'a mut RecipeStore, prompter: Prompter<R, W>, options: MenuOptions) -> Self {
        Self {
            store,
            prompter,
            options,
        }
    }

    /// Consume the session, returning its writer
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> BreadResult<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompter.choose("Please enter your choice: ", 0, 4)? else {
                break;
            };
            let action = MenuAction::from_choice(choice)
                .ok_or_else(|| BreadError::Validation(format!("no menu entry {}", choice)))?;
            tracing::debug!(?action, "menu selection");

            if self.dispatch(action)?.is_break() {
                break;
            }
        }

        writeln!(self.prompter.output(), "Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction) -> BreadResult<ControlFlow<()>> {
        match action {
            MenuAction::ReprintMenu => Ok(ControlFlow::Continue(())),
            MenuAction::ShowRecipes => self.show_recipes(),
            MenuAction::AdjustOrder => self.adjust_order(),
            MenuAction::PrintShoppingList => self.print_shopping_list(),
            MenuAction::Quit => Ok(ControlFlow::Break(())),
        }
    }

    fn print_menu(&mut self) -> BreadResult<()> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "Welcome to Breadbasket Recipe Manager!")?;
        // 0 is listed last
        for action in MenuAction::ALL.iter().skip(1) {
            writeln!(out, "{}. {}", *action as u8, action.label())?;
        }
        writeln!(out, "0. {}", MenuAction::ReprintMenu.label())?;
        Ok(())
    }

    fn show_recipes(&mut self) -> BreadResult<ControlFlow<()>> {
        let menu = format_recipe_menu(self.store.list());
        write!(self.prompter.output(), "\n{}", menu)?;
        Ok(ControlFlow::Continue(()))
    }

    fn adjust_order(&mut self) -> BreadResult<ControlFlow<()>> {
        if self.store.is_empty() {
            writeln!(self.prompter.output(), "\nNo recipes available.")?;
            return Ok(ControlFlow::Continue(()));
        }

        self.show_recipes()?;

        let count = i64::try_from(self.store.len()).unwrap_or(i64::MAX);
        let Some(choice) = self.prompter.choose("Which bread would you like? ", 1, count)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(delta) = self.prompter.integer("How much of this bread would you like? ")? else {
            return Ok(ControlFlow::Break(()));
        };

        if delta == 0 {
            writeln!(
                self.prompter.output(),
                "Invalid quantity. Please enter a positive number to add or a negative number to reduce."
            )?;
            return Ok(ControlFlow::Continue(()));
        }

        // choose() guarantees 1..=count
        let index = usize::try_from(choice - 1)
            .map_err(|_| BreadError::Validation(format!("no recipe {}", choice)))?;
        let change = self.store.adjust_quantity(index, delta)?;
        let name = self.store.get(index)?.name();

        writeln!(
            self.prompter.output(),
            "{}",
            format_quantity_change(name, delta, change)
        )?;
        Ok(ControlFlow::Continue(()))
    }

    fn print_shopping_list(&mut self) -> BreadResult<ControlFlow<()>> {
        let report = ShoppingListBuilder::new(self.store).build().render();
        write!(self.prompter.output(), "\n{}\n", report)?;

        let prompt = if self.options.save_by_default {
            "Do you want to save this list (Y/n)? "
        } else {
            "Do you want to save this list (y/N)? "
        };
        let Some(save) = self.prompter.confirm(prompt, self.options.save_by_default)? else {
            return Ok(ControlFlow::Break(()));
        };

        if !save {
            writeln!(self.prompter.output(), "Shopping list was not saved.")?;
            return Ok(ControlFlow::Continue(()));
        }

        let destination = &self.options.shopping_list_file;
        match ShoppingListBuilder::persist(&report, destination) {
            Ok(()) => writeln!(
                self.prompter.output(),
                "Shopping list saved to {}!",
                destination.display()
            )?,
            // Kept off the output stream so it never mixes into the report
            Err(e) => eprintln!("Error saving shopping list: {}", e),
        }
        Ok(ControlFlow::Continue(()))
    }
}
