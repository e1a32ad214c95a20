use clap::{Parser, Subcommand};
use maillage_core::Level;
use std::path::PathBuf;

/// CLI arguments for maillage-cli
#[derive(Debug, Parser)]
#[command(
    name = "maillage",
    version,
    about = "CLI for querying the French administrative mesh (regions, départements, communes)"
)]
pub struct CliArgs {
    /// Dataset to load: JSON export (.json / .json.gz) or binary cache (.bin)
    #[arg(short = 'd', long = "data", env = "MAILLAGE_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Resolver configuration file (JSON)
    #[arg(short = 'c', long = "config", env = "MAILLAGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show unit counts per level
    Stats,

    /// Lookup a unit by code and level
    Unit {
        /// Public code (e.g. 21231 for Dijon, 21 for Côte-d'Or)
        code: String,
        #[arg(short, long, default_value = "commune")]
        level: Level,
    },

    /// Lookup a unit by its 9-character identifier
    Id { id: String },

    /// List every unit of a level
    Level {
        level: Level,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the direct children of a region or département
    Children {
        code: String,
        #[arg(short, long)]
        level: Level,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the ancestor chain of a unit
    Breadcrumb {
        code: String,
        #[arg(short, long, default_value = "commune")]
        level: Level,
    },

    /// Nearest units of the same level in the same region
    Near {
        code: String,
        #[arg(short, long, default_value = "commune")]
        level: Level,
        /// Override the configured neighbour count
        #[arg(long)]
        limit: Option<usize>,
        /// Leave the unit itself out of the list
        #[arg(long)]
        exclude_self: bool,
        /// Use the secondary (smaller) neighbour set
        #[arg(long)]
        secondary: bool,
    },

    /// Ranked search on labels
    Search {
        query: String,
        #[arg(short, long)]
        level: Option<Level>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Write the loaded dataset as a binary cache
    Build {
        /// Output path (conventionally ending in .bin)
        output: PathBuf,
    },
}
