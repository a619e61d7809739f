use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use geo_nd::Vector;
use starid_core::attitude::{solve as triad_solve, Observation};
use starid_core::catalog::filter_catalog;
use starid_core::config::SolverConfig;
use starid_core::image::extract;
use starid_core::triangle::{match_triangle, TriangleIndex};
use starid_core::vector::Vec3;

use crate::catalog_csv::parse_catalog_csv;
use crate::raster_txt::parse_raster_txt;

#[derive(Args)]
pub struct SolveArgs {
    /// Plain-text raster file (see `raster_txt` format).
    pub raster: PathBuf,
    /// Catalog CSV file.
    pub catalog: PathBuf,
    /// Optional TOML config overriding default tunables.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<SolverConfig> {
    match path {
        None => Ok(SolverConfig::default()),
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config file {}", p.display()))?;
            Ok(toml::from_str(&text)?)
        }
    }
}

pub fn run(args: &SolveArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.validate()?;

    let raster = parse_raster_txt(&args.raster)?;
    let image = extract(&raster, &config);
    tracing::debug!(cluster_count = image.clusters.len(), "extracted sources");

    if image.clusters.len() < 3 {
        anyhow::bail!(
            "need at least 3 bright sources to identify a triangle, found {}",
            image.clusters.len()
        );
    }

    let raw_catalog = parse_catalog_csv(&args.catalog, config.max_vmag)?;
    let catalog = filter_catalog(raw_catalog, config.max_vmag);
    if catalog.is_empty() {
        anyhow::bail!("catalog has no stars after magnitude filtering");
    }
    let index = TriangleIndex::build(&catalog, config.max_fov_rad);
    tracing::debug!(entries = index.len(), "built triangle index");

    // Placeholder plate-solve: real camera intrinsics (focal length,
    // distortion) are an external collaborator's responsibility per
    // spec.md's scope boundary; this demo treats pixel offsets from image
    // center as small-angle unit-vector components so `solve` has
    // something concrete to run end to end.
    let (w, h) = (image.width as f64, image.height as f64);
    let to_unit_vector = |cx: f64, cy: f64| -> Vec3 {
        let dx = (cx - w / 2.0) / w;
        let dy = (cy - h / 2.0) / h;
        let v: Vec3 = [dx, dy, 1.0].into();
        v.normalize()
    };

    let observed = [
        to_unit_vector(image.clusters[0].x_centroid, image.clusters[0].y_centroid),
        to_unit_vector(image.clusters[1].x_centroid, image.clusters[1].y_centroid),
        to_unit_vector(image.clusters[2].x_centroid, image.clusters[2].y_centroid),
    ];

    let Some(matched) = match_triangle(observed, &index, config.tolerance_rad) else {
        anyhow::bail!("no triangle match found for the three brightest sources");
    };
    println!(
        "Matched star IDs: {:?} (error {:.2e} rad)",
        matched.star_ids, matched.error
    );

    let by_id = |id: i64| catalog.iter().find(|s| s.id == id).map(|s| s.direction());
    let (Some(r1), Some(r2)) = (by_id(matched.correspondence.0), by_id(matched.correspondence.1))
    else {
        anyhow::bail!("matched star ID not found in catalog (corrupted index?)");
    };

    let observations = vec![
        Observation {
            body: observed[0],
            inertial: r1,
            weight: 1.0,
        },
        Observation {
            body: observed[1],
            inertial: r2,
            weight: 1.0,
        },
    ];

    match triad_solve(&observations) {
        Some(q) => println!("Quaternion (w,x,y,z): {:.6} {:.6} {:.6} {:.6}", q.w, q.x, q.y, q.z),
        None => anyhow::bail!("TRIAD could not solve: observation pair is colinear"),
    }

    Ok(())
}
