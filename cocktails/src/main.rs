// Binary-only modules (not part of the library)
mod app;
mod cli;
mod logging;

use crate::cli::{Args, Command};
use crate::logging::setup_logging;
use anyhow::Result;
use clap::Parser;
use cocktails::config::{default_config_path, load_config};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;
    tracing::debug!(path = %config_path.display(), "loaded configuration");

    match args.command {
        Command::Show { recipe, width } => app::show::run(&recipe, width)?,
        Command::Validate { path } => {
            if !app::validate::run(&path)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Search {
            terms,
            all,
            missing,
            stdin,
        } => app::search::run(
            &config,
            terms,
            app::search::SearchOptions {
                all,
                missing,
                stdin,
            },
        )?,
        Command::Ingredients { recipes } => app::ingredients::run(&recipes)?,
        Command::Card {
            recipes,
            output,
            png,
        } => app::card::run(&config, &recipes, app::card::CardOptions { output, png })?,
        Command::Migrate { files } => app::migrate::run(&files)?,
    }
    Ok(ExitCode::SUCCESS)
}
