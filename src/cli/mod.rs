pub mod completions;
pub mod merge;

use clap::{Parser, Subcommand};

/// tmm - Tilemap manager: merge tile images into a grid tileset
#[derive(Parser, Debug)]
#[command(name = "tmm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge multiple image files into a tilemap
    Merge(merge::MergeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
