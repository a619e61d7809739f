use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FOV_RAD, MAX_TOP_CLUSTERS, MAX_VMAG, THRESHOLD_CONSTANT, TOLERANCE_RAD};

/// Tunables shared across the source-extraction, indexing, and matching
/// stages. Compile-time constants in [`crate::consts`] provide the defaults;
/// this struct lets callers vary them without rebuilding, per spec's design
/// note on making tunables an explicit configuration value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Multiplier on sigma for the mean+k*sigma detection threshold.
    #[serde(default = "default_threshold_constant")]
    pub threshold_constant: f64,
    /// Cap on retained clusters per image, brightest first.
    #[serde(default = "default_max_top_clusters")]
    pub max_top_clusters: usize,
    /// Maximum pairwise arc (radians) admitted into the triangle index.
    #[serde(default = "default_max_fov_rad")]
    pub max_fov_rad: f64,
    /// Matcher tolerance on each canonical arc, radians.
    #[serde(default = "default_tolerance_rad")]
    pub tolerance_rad: f64,
    /// Catalog magnitude cutoff; fainter stars are filtered at ingest.
    #[serde(default = "default_max_vmag")]
    pub max_vmag: f64,
}

fn default_threshold_constant() -> f64 {
    THRESHOLD_CONSTANT
}
fn default_max_top_clusters() -> usize {
    MAX_TOP_CLUSTERS
}
fn default_max_fov_rad() -> f64 {
    MAX_FOV_RAD
}
fn default_tolerance_rad() -> f64 {
    TOLERANCE_RAD
}
fn default_max_vmag() -> f64 {
    MAX_VMAG
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold_constant: THRESHOLD_CONSTANT,
            max_top_clusters: MAX_TOP_CLUSTERS,
            max_fov_rad: MAX_FOV_RAD,
            tolerance_rad: TOLERANCE_RAD,
            max_vmag: MAX_VMAG,
        }
    }
}

impl SolverConfig {
    /// Validate tunables are in physically sensible ranges.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.threshold_constant <= 0.0 {
            return Err(crate::error::StarIdError::InvalidConfig(
                "threshold_constant must be positive".into(),
            ));
        }
        if self.max_fov_rad <= 0.0 || self.max_fov_rad > std::f64::consts::PI {
            return Err(crate::error::StarIdError::InvalidConfig(
                "max_fov_rad must be in (0, pi]".into(),
            ));
        }
        if self.tolerance_rad < 0.0 {
            return Err(crate::error::StarIdError::InvalidConfig(
                "tolerance_rad must be non-negative".into(),
            ));
        }
        if self.max_top_clusters == 0 {
            return Err(crate::error::StarIdError::InvalidConfig(
                "max_top_clusters must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
