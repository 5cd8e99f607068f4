use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(files: &[PathBuf]) -> Result<()> {
    for file in files {
        let written = cocktails_recipe::migrate(file)
            .with_context(|| format!("Failed to migrate {}", file.display()))?;
        println!("{} -> {}", file.display(), written.display());
    }
    Ok(())
}
