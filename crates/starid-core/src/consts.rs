/// Multiplier on sigma for the mean+k*sigma detection threshold.
pub const THRESHOLD_CONSTANT: f64 = 5.0;

/// Cap on retained clusters per image, brightest first.
pub const MAX_TOP_CLUSTERS: usize = 50;

/// Maximum pairwise arc (radians) admitted into the triangle index.
pub const MAX_FOV_RAD: f64 = 10.0 * std::f64::consts::PI / 180.0;

/// Matcher tolerance on each canonical arc, radians.
pub const TOLERANCE_RAD: f64 = 0.01;

/// Catalog magnitude cutoff; fainter stars are filtered at ingest.
pub const MAX_VMAG: f64 = 6.0;

/// Small epsilon guarding against division by (near-)zero vector norms.
pub const EPSILON: f64 = 1e-10;
