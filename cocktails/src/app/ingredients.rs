use anyhow::{Context, Result};
use cocktails_recipe::{aggregate, load_recipe};
use colored::Colorize;

use super::expand_recipe_args;

/// Print every ingredient with the recipes that use it.
pub fn run(args: &[String]) -> Result<()> {
    let mut recipes = Vec::new();
    for file in expand_recipe_args(args)? {
        let recipe = load_recipe(&file)
            .with_context(|| format!("Failed to load recipe: {}", file.display()))?;
        recipes.push(recipe);
    }

    for (ingredient, titles) in aggregate(&recipes) {
        println!("- {}: {}", ingredient.bold(), titles.join(", "));
    }
    Ok(())
}
