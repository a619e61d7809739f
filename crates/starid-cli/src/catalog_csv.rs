use std::path::Path;

use anyhow::{Context, Result};
use starid_core::catalog::Star;

/// Parse a catalog CSV file into stars, filtered by `max_vmag`.
///
/// Expected layout (grounded on the reference catalog ingest this project
/// was distilled from): a header row, then comma-separated rows with at
/// least 10 columns where column 1 is the integer star ID, column 5 is
/// visual magnitude, and columns 8/9 are right ascension/declination in
/// degrees. Rows with an empty magnitude, unparseable numeric fields, or
/// magnitude above the cutoff are skipped rather than failing the whole
/// load, matching the catalog provider contract's "filtered silently at the
/// boundary" error policy.
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P, max_vmag: f64) -> Result<Vec<Star>> {
    let contents = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading catalog file {}", path.as_ref().display()))?;

    let mut stars = Vec::new();
    for line in contents.lines().skip(1) {
        let row: Vec<&str> = line.split(',').collect();
        if row.len() < 10 {
            continue;
        }
        let Ok(id) = row[1].trim().parse::<i64>() else {
            continue;
        };
        let vmag_field = row[5].trim();
        if vmag_field.is_empty() {
            continue;
        }
        let Ok(vmag) = vmag_field.parse::<f64>() else {
            continue;
        };
        if vmag > max_vmag {
            continue;
        }
        let (Ok(ra_deg), Ok(dec_deg)) = (
            row[8].trim().parse::<f64>(),
            row[9].trim().parse::<f64>(),
        ) else {
            continue;
        };

        stars.push(Star::from_ra_dec(id, ra_deg.to_radians(), dec_deg.to_radians(), vmag));
    }

    Ok(stars)
}
