//! Reading and writing recipe files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::RecipeError;
use crate::recipe::Recipe;

/// Load a recipe, picking the parser from the file extension.
///
/// `.yaml` and `.yml` files are parsed as YAML, `.json` files as JSON.
pub fn load_recipe(path: impl AsRef<Path>) -> Result<Recipe, RecipeError> {
    let path = path.as_ref();
    let format = Format::of(path).ok_or_else(|| RecipeError::UnsupportedFormat(path.to_path_buf()))?;
    let contents = fs::read_to_string(path).map_err(|e| RecipeError::io(path, e))?;
    debug!(path = %path.display(), ?format, "loading recipe");

    match format {
        Format::Yaml => serde_yaml::from_str(&contents).map_err(|source| RecipeError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        Format::Json => serde_json::from_str(&contents).map_err(|source| RecipeError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write a recipe as YAML, keys in schema order.
pub fn save_yaml(recipe: &Recipe, path: impl AsRef<Path>) -> Result<(), RecipeError> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(recipe).map_err(|source| RecipeError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, yaml).map_err(|e| RecipeError::io(path, e))
}

/// Convert a legacy JSON recipe into a YAML file beside it.
///
/// Returns the path of the written `.yaml` file.
pub fn migrate(json: impl AsRef<Path>) -> Result<PathBuf, RecipeError> {
    let json = json.as_ref();
    if Format::of(json) != Some(Format::Json) {
        return Err(RecipeError::UnsupportedFormat(json.to_path_buf()));
    }
    let recipe = load_recipe(json)?;
    let destination = json.with_extension("yaml");
    save_yaml(&recipe, &destination)?;
    debug!(from = %json.display(), to = %destination.display(), "migrated recipe");
    Ok(destination)
}

/// Recipe files named by `path`: the file itself, or every `*.yaml` file
/// directly inside a directory, sorted by name.
pub fn recipe_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, RecipeError> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(RecipeError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        ));
    }

    let escaped = glob::Pattern::escape(&path.to_string_lossy());
    let pattern = format!("{escaped}/*.yaml");
    let entries = glob::glob(&pattern).map_err(|source| RecipeError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(file) => files.push(file),
            Err(e) => warn!(path = %e.path().display(), "skipping unreadable entry: {}", e.error()),
        }
    }
    files.sort();
    Ok(files)
}

/// Load every recipe in a directory.
///
/// Files that fail to parse are logged and skipped so one bad recipe does
/// not hide the rest.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Recipe>, RecipeError> {
    let mut recipes = Vec::new();
    for file in recipe_files(dir)? {
        match load_recipe(&file) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => warn!("skipping recipe: {e}"),
        }
    }
    Ok(recipes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}
