//! Cocktails Recipe - the recipe document model shared by every front end.
//!
//! Recipes are YAML (or legacy JSON) documents. This crate loads them,
//! checks them for schema and content problems, and answers the simple
//! questions the CLI asks: what can I make, and what do I need to buy.

mod aggregate;
mod error;
mod format;
mod load;
mod recipe;
mod search;
mod validate;

pub use aggregate::aggregate;
pub use error::RecipeError;
pub use format::{fraction, title_case};
pub use load::{load_dir, load_recipe, migrate, recipe_files, save_yaml};
pub use recipe::{Glass, Ingredient, Preparation, Recipe, Served, Unit};
pub use search::{containing_all, rank, RecipeScore};
pub use validate::{validate, validate_file, Diagnostic, Report, Severity};
