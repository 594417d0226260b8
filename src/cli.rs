use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recommend recipes from what is in your pantry", long_about = None)]
pub struct Cli {
    /// Recipe catalog JSON file (defaults to the bundled catalog)
    #[arg(long, global = true, env = "PANTRY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Engine configuration JSON file
    #[arg(long, global = true, env = "PANTRY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse free-text pantry entries and print each item as parsed, before merging
    Parse {
        /// Entries separated by commas or newlines, e.g. "2 eggs, bread"
        text: String,
    },

    /// Build a pantry and print recipes ranked by match score
    Recommend {
        /// Free-text pantry entries
        #[arg(short, long)]
        items: Option<String>,

        /// JSON file with an array of {"label", "confidence"} detections
        #[arg(short, long)]
        detections: Option<PathBuf>,

        /// Scale each listed recipe to this many servings
        #[arg(short, long)]
        servings: Option<u32>,

        /// Only print the first N recipes
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a recipe's ingredients scaled to a serving count
    Scale {
        /// Recipe id in the catalog
        recipe_id: String,

        /// Target number of servings
        servings: u32,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
