use anyhow::Result;
use cocktails_recipe::{recipe_files, validate_file, Severity};
use colored::Colorize;
use std::path::Path;

/// Validate one file or a directory of recipes. Returns whether every file
/// was free of errors.
pub fn run(path: &Path) -> Result<bool> {
    let mut clean = true;
    for file in recipe_files(path)? {
        println!("Processing {}...", file.display());
        let report = validate_file(&file)?;

        for diagnostic in &report.diagnostics {
            match diagnostic.severity {
                Severity::Error => {
                    println!("{} {}", "ERROR:".red().bold(), diagnostic.message.red())
                }
                Severity::Warning => println!(
                    "{} {}",
                    "WARNING:".yellow().bold(),
                    diagnostic.message.yellow()
                ),
            }
        }

        let warnings = report.warning_count();
        let errors = report.error_count();
        if report.is_clean() {
            println!("{}", "No errors or warnings found.".green());
        }
        if warnings > 0 {
            println!(
                "A total of {} were found.",
                format!("{warnings} warnings").yellow().bold()
            );
        }
        if errors > 0 {
            println!("A total of {} were found.", format!("{errors} errors").red().bold());
            clean = false;
        }
        println!();
    }
    Ok(clean)
}
