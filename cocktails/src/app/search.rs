use anyhow::{Context, Result};
use cocktails::config::Config;
use cocktails_recipe::{containing_all, load_dir, rank};
use colored::Colorize;
use std::io::BufRead;
use std::path::PathBuf;

pub struct SearchOptions {
    pub all: bool,
    pub missing: usize,
    pub stdin: bool,
}

pub fn run(config: &Config, terms: Vec<String>, options: SearchOptions) -> Result<()> {
    let (dir, mut terms) = split_dir(terms, config);
    if options.stdin {
        terms.extend(read_lines(std::io::stdin().lock())?);
    }
    tracing::debug!(dir = %dir.display(), terms = terms.len(), "searching recipes");

    let recipes = load_dir(&dir)
        .with_context(|| format!("Failed to read recipes from {}", dir.display()))?;

    if options.all {
        let found = containing_all(&recipes, &terms);
        println!(
            "Found {} recipes that contain {}",
            found.len(),
            terms.join(" AND ").bold()
        );
        for recipe in found {
            println!("- {}", recipe.title.cyan());
        }
        return Ok(());
    }

    for score in rank(&recipes, &terms, options.missing) {
        if score.missing.is_empty() {
            println!("{}: {}", score.recipe.title.bold(), "No missing ingredients".green());
        } else {
            println!(
                "{}: {} {}",
                score.recipe.title.bold(),
                format!("Missing {} ingredients", score.missing.len()).yellow(),
                format!("[{}]", score.missing_names().join(", ")).dimmed()
            );
        }
    }
    Ok(())
}

/// Take a leading directory argument off the term list. Without one, the
/// configured library is used, then the current directory.
fn split_dir(mut terms: Vec<String>, config: &Config) -> (PathBuf, Vec<String>) {
    if let Some(first) = terms.first() {
        let candidate = PathBuf::from(first);
        if candidate.is_dir() {
            terms.remove(0);
            return (candidate, terms);
        }
    }
    let dir = config.recipe_dir().unwrap_or_else(|| PathBuf::from("."));
    (dir, terms)
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read ingredients from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
