//! Source extraction: statistical thresholding, connected-components
//! labeling, and intensity-weighted cluster centroiding over a calibrated
//! pixel raster. Decoding the image container itself is an external
//! collaborator's responsibility; this module starts from an already
//! materialized [`Raster`].

pub mod clusters;
pub mod components;
pub mod raster;
pub mod threshold;

pub use clusters::{build_clusters, Cluster, Pixel};
pub use components::label_components;
pub use raster::Raster;
pub use threshold::{compute_statistics, compute_threshold, foreground_mask, Statistics, Threshold};

use crate::config::SolverConfig;

/// Extracted per-image artifact: statistics, mask, and the ordered list of
/// clusters (descending by total intensity, capped per config). Mirrors the
/// `ImageData` artifact in the data model.
#[derive(Clone, Debug)]
pub struct ImageData {
    pub width: usize,
    pub height: usize,
    pub statistics: Statistics,
    pub threshold: Threshold,
    pub clusters: Vec<Cluster>,
}

/// Run the full source-extraction pipeline: statistics -> threshold ->
/// mask -> labeling -> clustering -> top-K truncation.
pub fn extract(raster: &Raster, config: &SolverConfig) -> ImageData {
    let data = raster.as_array();
    let statistics = compute_statistics(data);
    let threshold = compute_threshold(&statistics, config.threshold_constant);
    if threshold.fallback_applied {
        tracing::warn!(
            mean = statistics.mean,
            stddev = statistics.stddev,
            max = statistics.max,
            threshold = threshold.value,
            "k-sigma threshold exceeded image max; applied saturation-guard fallback"
        );
    }
    let mask = foreground_mask(data, threshold.value);
    let (labels, component_count) = label_components(&mask);
    tracing::debug!(component_count, "labeled connected components");
    let clusters = build_clusters(data, &labels, config.max_top_clusters);

    ImageData {
        width: raster.width(),
        height: raster.height(),
        statistics,
        threshold,
        clusters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_centroids_stay_in_bounds() {
        let mut pixels = vec![10.0_f64; 16];
        pixels[1 * 4 + 2] = 1000.0;
        let raster = Raster::new(4, 4, pixels).unwrap();
        let image = extract(&raster, &SolverConfig::default());
        assert!(image.clusters.len() <= SolverConfig::default().max_top_clusters);
        for c in &image.clusters {
            assert!(c.x_centroid >= 0.0 && c.x_centroid <= (image.width - 1) as f64);
            assert!(c.y_centroid >= 0.0 && c.y_centroid <= (image.height - 1) as f64);
        }
    }
}
