mod catalog_csv;
mod commands;
mod raster_txt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starid", about = "Lost-in-space star identifier and attitude solver")]
#[command(version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a triangle index from a catalog CSV and report its size.
    Index(commands::index::IndexArgs),
    /// Run source extraction, matching, and TRIAD on a raster + catalog.
    Solve(commands::solve::SolveArgs),
    /// Print the default solver configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Index(args) => commands::index::run(args),
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Config => commands::config::run(),
    }
}
