use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cocktails")]
#[command(about = "Cocktail recipe library tools")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a recipe in the terminal
    Show {
        /// Recipe file (YAML or JSON)
        recipe: PathBuf,

        /// Panel width in columns (defaults to $COLUMNS, then 100)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Check recipe files for schema and content problems
    ///
    /// If PATH is a directory, every .yaml file in it is validated.
    Validate {
        path: PathBuf,
    },

    /// Find recipes that can be made from the given ingredients
    ///
    /// The first argument is used as the recipe directory when it names a
    /// directory; otherwise the configured library is searched.
    Search {
        #[arg(value_name = "INGREDIENTS")]
        terms: Vec<String>,

        /// Recipe must contain every listed ingredient (substring match)
        #[arg(short, long)]
        all: bool,

        /// How many ingredients may be missing
        #[arg(short, long, default_value_t = 0)]
        missing: usize,

        /// Read the ingredient list from stdin, one per line
        #[arg(short, long)]
        stdin: bool,
    },

    /// List every ingredient used by the given recipes
    Ingredients {
        /// Recipe files, directories or glob patterns
        #[arg(required = true)]
        recipes: Vec<String>,
    },

    /// Render recipes as printable 6x4 index cards
    Card {
        /// Recipe files or glob patterns
        #[arg(required = true)]
        recipes: Vec<String>,

        /// Write every card into this PDF instead of one PDF per recipe
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Also save each card as a PNG
        #[arg(long)]
        png: bool,
    },

    /// Convert legacy JSON recipes to YAML
    Migrate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
