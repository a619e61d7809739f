use std::path::Path;

use anyhow::{bail, Context, Result};
use starid_core::image::Raster;

/// Parse a plain-text raster: first line `width height`, followed by
/// `width*height` whitespace-separated non-negative floating-point
/// intensities in row-major order. This stands in for the real image
/// container decoder, which spec.md treats as an external collaborator
/// ("a provider yielding a rectangular array of floating-point intensities
/// plus width and height").
pub fn parse_raster_txt<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let contents = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading raster file {}", path.as_ref().display()))?;

    let mut tokens = contents.split_whitespace();
    let width: usize = tokens
        .next()
        .context("missing raster width")?
        .parse()
        .context("invalid raster width")?;
    let height: usize = tokens
        .next()
        .context("missing raster height")?
        .parse()
        .context("invalid raster height")?;

    let pixels: Vec<f64> = tokens
        .map(|t| t.parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .context("invalid pixel intensity")?;

    if pixels.len() != width * height {
        bail!(
            "expected {} pixels for {}x{} raster, found {}",
            width * height,
            width,
            height,
            pixels.len()
        );
    }

    Ok(Raster::new(width, height, pixels)?)
}
