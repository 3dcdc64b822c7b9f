use clap::Parser;
use miette::Result;
use tmm::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge(args) => tmm::cli::merge::run(args)?,
        Commands::Completions(args) => tmm::cli::completions::run(args)?,
    }

    Ok(())
}
