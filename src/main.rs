use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use breadbasket::cli::{handle_recipes_command, MenuOptions, MenuSession, Prompter};
use breadbasket::config::{paths::BreadPaths, settings::Settings};
use breadbasket::logging::init_cli_logger;
use breadbasket::storage::RecipeStore;

#[derive(Parser)]
#[command(
    name = "breadbasket",
    version,
    about = "Bread recipe manager and shopping list builder",
    long_about = "Breadbasket loads your bread recipes from a plain-text file, lets you \
                  build up an order of loaves, and totals the yeast, flour, sugar, eggs \
                  and butter you need to buy."
)]
struct Cli {
    /// Recipe file to load (defaults to the configured recipe file)
    ///
    /// Can also be set with `BREADBASKET_RECIPES`.
    #[arg(short, long, global = true, env = "BREADBASKET_RECIPES")]
    recipes: Option<PathBuf>,

    /// File the shopping list is saved to
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// List the loaded recipes and exit
    Recipes {
        /// Show every ingredient amount per recipe
        #[arg(short, long)]
        details: bool,
    },

    /// Write a settings file with the current paths
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    // The menu and recipes commands still run with default settings when no
    // config directory can be found; init and config need one.
    let paths = BreadPaths::new().inspect_err(|e| {
        tracing::warn!(error = %e, "no config directory, using default settings");
    });
    let mut settings = Settings::resolve(paths.as_ref().ok())?;

    if let Some(recipes) = cli.recipes {
        settings.recipe_file = recipes;
    }
    if let Some(output) = cli.output {
        settings.shopping_list_file = output;
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut store = load_store(&settings)?;
            println!("Recipes successfully loaded!");

            let options = MenuOptions {
                shopping_list_file: settings.shopping_list_file.clone(),
                save_by_default: settings.save_by_default,
            };
            let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            MenuSession::new(&mut store, prompter, options).run()?;
        }
        Commands::Recipes { details } => {
            let store = load_store(&settings)?;
            handle_recipes_command(&store, details, &mut io::stdout().lock())?;
        }
        Commands::Init => {
            let paths = paths?;
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            let paths = paths?;
            println!("Breadbasket Configuration");
            println!("=========================");
            println!("Config directory:   {}", paths.base_dir().display());
            println!(
                "Settings file:      {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not written)" }
            );
            println!();
            println!("Settings:");
            println!("  Recipe file:        {}", settings.recipe_file.display());
            println!("  Shopping list file: {}", settings.shopping_list_file.display());
            println!("  Save by default:    {}", settings.save_by_default);
        }
    }

    Ok(())
}

fn load_store(settings: &Settings) -> Result<RecipeStore> {
    RecipeStore::load(&settings.recipe_file).with_context(|| {
        format!(
            "Error loading recipes from {}",
            settings.recipe_file.display()
        )
    })
}
