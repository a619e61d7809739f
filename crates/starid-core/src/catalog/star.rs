use geo_nd::Vector;

use crate::vector::Vec3;

/// A catalog entry: integer ID, unit direction on the celestial sphere, and
/// visual magnitude (lower is brighter). Immutable after load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub id: i64,
    pub vector: Vec3,
    pub magnitude: f64,
}

impl Star {
    /// Build a star from a right-ascension/declination pair given in
    /// radians, per the catalog provider contract.
    pub fn from_ra_dec(id: i64, ra_rad: f64, dec_rad: f64, magnitude: f64) -> Self {
        let (sin_dec, cos_dec) = dec_rad.sin_cos();
        let (sin_ra, cos_ra) = ra_rad.sin_cos();
        Self {
            id,
            vector: [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec].into(),
            magnitude,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.vector
    }
}

/// Filter a raw catalog down to the stars usable for triangle indexing:
/// visual magnitude at or below the cutoff. This is the ingest-time filter
/// the triangle index builder assumes has already run.
pub fn filter_catalog(stars: impl IntoIterator<Item = Star>, max_vmag: f64) -> Vec<Star> {
    stars
        .into_iter()
        .filter(|s| s.magnitude <= max_vmag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_norm_invariant() {
        let s = Star::from_ra_dec(1, 1.2345, -0.4321, 3.0);
        assert_abs_diff_eq!(s.vector.dot(&s.vector), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn magnitude_filter_drops_faint_stars() {
        let stars = vec![
            Star::from_ra_dec(1, 0.0, 0.0, 3.0),
            Star::from_ra_dec(2, 0.0, 0.0, 7.5),
        ];
        let filtered = filter_catalog(stars, 6.0);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
