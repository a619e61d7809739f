use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use starid_core::catalog::filter_catalog;
use starid_core::config::SolverConfig;
use starid_core::triangle::TriangleIndex;

use crate::catalog_csv::parse_catalog_csv;

#[derive(Args)]
pub struct IndexArgs {
    /// Catalog CSV file.
    pub catalog: PathBuf,
    /// Optional TOML config overriding default tunables.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &IndexArgs) -> Result<()> {
    let config = super::solve::load_config(args.config.as_deref())?;
    config.validate()?;

    let raw = parse_catalog_csv(&args.catalog, config.max_vmag)?;
    let catalog = filter_catalog(raw, config.max_vmag);
    tracing::debug!(count = catalog.len(), "loaded catalog");

    let index = TriangleIndex::build(&catalog, config.max_fov_rad);

    println!("Catalog stars: {}", catalog.len());
    println!("Triangle index entries: {}", index.len());
    Ok(())
}
