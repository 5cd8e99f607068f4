use anyhow::{Context, Result};
use cocktails::terminal::render_recipe;
use cocktails_recipe::load_recipe;
use std::io::IsTerminal;
use std::path::Path;

const DEFAULT_WIDTH: usize = 100;

pub fn run(recipe: &Path, width: Option<usize>) -> Result<()> {
    let recipe = load_recipe(recipe)
        .with_context(|| format!("Failed to load recipe: {}", recipe.display()))?;

    let width = width.or_else(terminal_columns).unwrap_or(DEFAULT_WIDTH);
    for line in render_recipe(&recipe, width, use_color(&std::io::stdout())) {
        println!("{line}");
    }
    Ok(())
}

/// Styles are only written to a terminal.
fn use_color(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

fn terminal_columns() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}
