use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RECIPES: &str = "\
Recipe White
sugar 10
eggs 2
flour 500
yeast 7
butter 20
Recipe Rye
sugar 0
eggs 0
flour 450
yeast 5
butter 0
";

const WHITE_X3: &str = "\
Shopping List:
3 White loaf/loaves.

You will need a total of:
21.0 grams of yeast
1500.0 grams of flour
30.0 grams of sugar
6.0 egg(s)
60.0 grams of butter
";

fn breadbasket(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("breadbasket").unwrap();
    cmd.current_dir(dir)
        .env("BREADBASKET_DIR", dir.join("config"))
        .env_remove("BREADBASKET_RECIPES")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("recipelist.txt"), RECIPES).unwrap();
    dir
}

#[test]
fn order_and_save_shopping_list() {
    let dir = workspace();

    breadbasket(dir.path())
        .write_stdin("2\n1\n3\n3\ny\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipes successfully loaded!"))
        .stdout(predicate::str::contains(WHITE_X3))
        .stdout(predicate::str::contains("Shopping list saved to shoppinglist.txt!"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));

    let saved = fs::read_to_string(dir.path().join("shoppinglist.txt")).unwrap();
    assert_eq!(saved, WHITE_X3);
}

#[test]
fn output_flag_overrides_destination() {
    let dir = workspace();

    breadbasket(dir.path())
        .args(["--output", "lists/today.txt"])
        .write_stdin("2\n2\n1\n3\n\n4\n")
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("lists").join("today.txt")).unwrap();
    assert!(saved.starts_with("Shopping List:\n1 Rye loaf/loaves.\n"));
    assert!(!saved.contains("sugar"));
    assert!(!dir.path().join("shoppinglist.txt").exists());
}

#[test]
fn missing_recipe_file_is_fatal() {
    let dir = TempDir::new().unwrap();

    breadbasket(dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading recipes"))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn malformed_recipe_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("recipelist.txt"),
        "Recipe White\nsugar ten\neggs 2\nflour 500\nyeast 7\nbutter 20\n",
    )
    .unwrap();

    breadbasket(dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = workspace();

    breadbasket(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn recipes_command_lists_table() {
    let dir = workspace();

    breadbasket(dir.path())
        .arg("recipes")
        .assert()
        .success()
        .stdout(predicate::str::contains("White"))
        .stdout(predicate::str::contains("Rye"));
}

#[test]
fn recipes_command_with_explicit_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("breads.txt"), RECIPES).unwrap();

    breadbasket(dir.path())
        .args(["recipes", "--details", "--recipes", "breads.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe: White\nSugar: 10.0\n"));
}

#[test]
fn init_then_config_uses_saved_settings() {
    let dir = workspace();

    breadbasket(dir.path())
        .args(["--output", "saved.txt", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    breadbasket(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping list file: saved.txt"))
        .stdout(predicate::str::contains("(not written)").not());
}

#[test]
fn save_failure_is_reported_on_stderr() {
    let dir = workspace();
    fs::write(dir.path().join("blocker"), "").unwrap();

    breadbasket(dir.path())
        .args(["--output", "blocker/list.txt"])
        .write_stdin("2\n1\n1\n3\ny\n4\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error saving shopping list:"))
        .stdout(predicate::str::contains("Error saving").not())
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn recipes_env_var_selects_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("breads.txt"), RECIPES).unwrap();

    breadbasket(dir.path())
        .env("BREADBASKET_RECIPES", "breads.txt")
        .arg("recipes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rye"));
}

#[test]
fn recipes_flag_overrides_env_var() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("breads.txt"), RECIPES).unwrap();

    breadbasket(dir.path())
        .env("BREADBASKET_RECIPES", "missing.txt")
        .args(["recipes", "--recipes", "breads.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("White"));
}

#[test]
fn half_gram_totals_round_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("recipelist.txt"),
        "Recipe Tiny\nsugar 0\neggs 0\nflour 100\nyeast 1.25\nbutter 0.25\n",
    )
    .unwrap();

    breadbasket(dir.path())
        .write_stdin("2\n1\n1\n3\nn\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.3 grams of yeast\n100.0 grams of flour\n0.3 grams of butter\n"));
}
