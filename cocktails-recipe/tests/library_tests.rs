//! Integration tests for reading, migrating and validating recipe files on
//! disk.

use std::fs;
use std::path::Path;

use cocktails_recipe::{
    aggregate, load_dir, load_recipe, migrate, rank, recipe_files, save_yaml, validate_file,
    Glass, RecipeError, Served, Unit,
};
use tempfile::TempDir;

const NEGRONI: &str = r#"
title: Negroni
version: 3
author: Count Camillo Negroni
glass: lowball
served: on a rock
preparation: stirred
ingredients:
  - ingredient: Gin
    unit: ounce
    quantity: 1
  - ingredient: Campari
    unit: ounce
    quantity: 1
  - ingredient: Sweet Vermouth
    unit: ounce
    quantity: 1
    examples: [Carpano Antica, Cocchi di Torino]
instructions:
  - Stir with ice.
  - Strain over a large cube.
"#;

const DAIQUIRI_JSON: &str = r#"{
  "title": "Daiquiri",
  "version": 1,
  "ingredients": [
    {"ingredient": "White Rum", "unit": "ounce", "quantity": 2},
    {"ingredient": "Lime Juice", "unit": "ounce", "quantity": 0.75},
    {"ingredient": "Simple Syrup", "unit": "ounce", "quantity": 0.75}
  ],
  "instructions": ["Shake with ice.", "Strain into a chilled coupe."],
  "glass": "coupe",
  "yield": 1
}"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn loads_yaml_recipe() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "negroni.yaml", NEGRONI);

    let recipe = load_recipe(dir.path().join("negroni.yaml")).unwrap();
    assert_eq!(recipe.title, "Negroni");
    assert_eq!(recipe.version, 3);
    assert_eq!(recipe.glass, Some(Glass::Lowball));
    assert_eq!(recipe.served, Some(Served::OnARock));
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients[0].unit, Some(Unit::Ounce));
    assert_eq!(recipe.ingredients[2].examples.len(), 2);
    assert_eq!(recipe.yields, None);
}

#[test]
fn loads_json_recipe() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "daiquiri.json", DAIQUIRI_JSON);

    let recipe = load_recipe(dir.path().join("daiquiri.json")).unwrap();
    assert_eq!(recipe.title, "Daiquiri");
    assert_eq!(recipe.yields, Some(1));
    assert_eq!(recipe.ingredients[1].quantity, Some(0.75));
}

#[test]
fn malformed_yaml_reports_path() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.yaml", "title: [unterminated\n");

    let err = load_recipe(dir.path().join("broken.yaml")).unwrap_err();
    assert!(matches!(err, RecipeError::Yaml { .. }));
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn unknown_enum_value_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "odd.yaml", &NEGRONI.replace("lowball", "teacup"));
    assert!(load_recipe(dir.path().join("odd.yaml")).is_err());
}

// =============================================================================
// Directories
// =============================================================================

#[test]
fn directory_listing_is_sorted_yaml_only() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.yaml", NEGRONI);
    write(dir.path(), "a.yaml", NEGRONI);
    write(dir.path(), "c.json", DAIQUIRI_JSON);
    write(dir.path(), "notes.txt", "not a recipe");

    let files = recipe_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.yaml", "b.yaml"]);

    let single = recipe_files(dir.path().join("c.json")).unwrap();
    assert_eq!(single.len(), 1);
}

#[test]
fn load_dir_skips_bad_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "negroni.yaml", NEGRONI);
    write(dir.path(), "broken.yaml", "- not: a recipe\n");

    let recipes = load_dir(dir.path()).unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Negroni");
}

// =============================================================================
// Saving and migration
// =============================================================================

#[test]
fn save_then_load_preserves_recipe() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "negroni.yaml", NEGRONI);
    let original = load_recipe(dir.path().join("negroni.yaml")).unwrap();

    let copy = dir.path().join("copy.yaml");
    save_yaml(&original, &copy).unwrap();
    assert_eq!(load_recipe(&copy).unwrap(), original);

    let text = fs::read_to_string(&copy).unwrap();
    assert!(text.starts_with("title: Negroni\nversion: 3\n"));
    assert!(!text.contains("description"));
}

#[test]
fn migrate_writes_yaml_beside_json() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "daiquiri.json", DAIQUIRI_JSON);

    let written = migrate(dir.path().join("daiquiri.json")).unwrap();
    assert_eq!(written, dir.path().join("daiquiri.yaml"));

    let migrated = load_recipe(&written).unwrap();
    assert_eq!(migrated, load_recipe(dir.path().join("daiquiri.json")).unwrap());
    assert!(validate_file(&written).unwrap().error_count() == 0);
}

// =============================================================================
// Validation, search and aggregation over a directory
// =============================================================================

#[test]
fn validate_file_reports_content_problems() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "negroni.yaml", NEGRONI);
    let report = validate_file(dir.path().join("negroni.yaml")).unwrap();
    assert_eq!(report.error_count(), 0);
    // No description, but author is long enough.
    assert_eq!(report.warning_count(), 0);

    write(dir.path(), "bad.yaml", "title: [1, 2\n");
    let report = validate_file(dir.path().join("bad.yaml")).unwrap();
    assert_eq!(report.error_count(), 1);
}

#[test]
fn search_and_aggregate_loaded_library() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "negroni.yaml", NEGRONI);
    migrate({
        write(dir.path(), "daiquiri.json", DAIQUIRI_JSON);
        dir.path().join("daiquiri.json")
    })
    .unwrap();

    let recipes = load_dir(dir.path()).unwrap();
    assert_eq!(recipes.len(), 2);

    let ranked = rank(&recipes, &["gin", "campari", "sweet vermouth"], 0);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].recipe.title, "Negroni");

    let list = aggregate(&recipes);
    assert_eq!(list.len(), 6);
    assert_eq!(list["Lime Juice"], vec!["Daiquiri"]);
}
