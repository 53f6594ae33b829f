//! blspull CLI - BLS labor-statistics fetcher.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "blspull")]
#[command(about = "Pull BLS labor-statistics series into a local CSV dataset", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the configured series and merge them into the dataset
    Fetch {
        /// Dataset CSV file
        #[arg(long, default_value = "bls_data.csv")]
        dataset: PathBuf,

        /// Fetch-state JSON file
        #[arg(long, default_value = "last_fetch_date.json")]
        state_file: PathBuf,

        /// Fetch even if the dataset is still fresh
        #[arg(short, long)]
        force: bool,

        /// Skip the confirmation prompt when the dataset is still fresh
        #[arg(long)]
        yes: bool,
    },

    /// Show fetch freshness and a dataset summary
    Status {
        /// Dataset CSV file
        #[arg(long, default_value = "bls_data.csv")]
        dataset: PathBuf,

        /// Fetch-state JSON file
        #[arg(long, default_value = "last_fetch_date.json")]
        state_file: PathBuf,
    },

    /// List the configured series
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            dataset,
            state_file,
            force,
            yes,
        } => commands::fetch::fetch(&dataset, &state_file, force, yes, cli.quiet).await,
        Commands::Status {
            dataset,
            state_file,
        } => commands::status::status(&dataset, &state_file),
        Commands::List => commands::list::list_series(),
    }
}
