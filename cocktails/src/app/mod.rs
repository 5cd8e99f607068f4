pub mod card;
pub mod ingredients;
pub mod migrate;
pub mod search;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use cocktails_recipe::recipe_files;
use std::path::{Path, PathBuf};

/// Resolve command line recipe arguments to files.
///
/// Each argument may be a file, a directory (its `*.yaml` files) or a glob
/// pattern. Patterns that match nothing are reported and skipped.
pub fn expand_recipe_args(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        let path = Path::new(arg);
        if path.exists() {
            files.extend(recipe_files(path)?);
            continue;
        }

        let matches = glob::glob(arg).with_context(|| format!("Invalid pattern: {arg}"))?;
        let before = files.len();
        for entry in matches {
            match entry {
                Ok(file) if file.is_file() => files.push(file),
                Ok(_) => {}
                Err(e) => tracing::warn!("skipping {}: {}", e.path().display(), e.error()),
            }
        }
        if files.len() == before {
            tracing::warn!(pattern = %arg, "no recipes matched");
        }
    }
    Ok(files)
}
