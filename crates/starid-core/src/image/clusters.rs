use std::collections::HashMap;

use ndarray::Array2;

/// A single foreground pixel belonging to exactly one cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub x: usize,
    pub y: usize,
    pub intensity: f64,
}

/// A connected foreground component with its intensity-weighted centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// Provisional union-find root label; not a stable external identity.
    pub id: u32,
    pub pixels: Vec<Pixel>,
    pub x_centroid: f64,
    pub y_centroid: f64,
    pub total_intensity: f64,
}

/// Group resolved labels into clusters, compute intensity-weighted
/// centroids, and keep the `max_top_clusters` brightest (descending by
/// total intensity). Clusters whose total intensity is not positive are
/// dropped rather than emitted with an undefined centroid.
pub fn build_clusters(
    data: &Array2<f64>,
    labels: &Array2<u32>,
    max_top_clusters: usize,
) -> Vec<Cluster> {
    let (h, w) = labels.dim();

    struct Accum {
        id: u32,
        pixels: Vec<Pixel>,
        sum_x: f64,
        sum_y: f64,
        sum_i: f64,
    }

    let mut by_label: HashMap<u32, Accum> = HashMap::new();

    for y in 0..h {
        for x in 0..w {
            let label = labels[[y, x]];
            if label == 0 {
                continue;
            }
            let intensity = data[[y, x]];
            let entry = by_label.entry(label).or_insert_with(|| Accum {
                id: label,
                pixels: Vec::new(),
                sum_x: 0.0,
                sum_y: 0.0,
                sum_i: 0.0,
            });
            entry.pixels.push(Pixel { x, y, intensity });
            entry.sum_x += x as f64 * intensity;
            entry.sum_y += y as f64 * intensity;
            entry.sum_i += intensity;
        }
    }

    let mut clusters: Vec<Cluster> = by_label
        .into_values()
        .filter(|a| a.sum_i > 0.0)
        .map(|a| Cluster {
            id: a.id,
            x_centroid: a.sum_x / a.sum_i,
            y_centroid: a.sum_y / a.sum_i,
            total_intensity: a.sum_i,
            pixels: a.pixels,
        })
        .collect();

    clusters.sort_unstable_by(|a, b| {
        b.total_intensity
            .partial_cmp(&a.total_intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    clusters.truncate(max_top_clusters);
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::components::label_components;
    use crate::image::threshold::{compute_statistics, compute_threshold, foreground_mask};

    /// Scenario A: single saturated pixel produces one cluster at its
    /// coordinates with the full intensity.
    #[test]
    fn scenario_a_single_cluster() {
        let mut pixels = vec![10.0_f64; 16];
        pixels[1 * 4 + 2] = 1000.0;
        let data = Array2::from_shape_vec((4, 4), pixels).unwrap();
        let stats = compute_statistics(&data);
        let threshold = compute_threshold(&stats, 5.0);
        let mask = foreground_mask(&data, threshold.value);
        let (labels, _) = label_components(&mask);
        let clusters = build_clusters(&data, &labels, 50);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].x_centroid, 2.0);
        assert_eq!(clusters[0].y_centroid, 1.0);
        assert_eq!(clusters[0].total_intensity, 1000.0);
    }

    #[test]
    fn cap_enforced_and_sorted_descending() {
        // Four isolated single-pixel clusters with decreasing intensity.
        let mut data = Array2::<f64>::zeros((1, 8));
        let mut mask = Array2::<bool>::from_elem((1, 8), false);
        for (i, &v) in [40.0, 30.0, 20.0, 10.0].iter().enumerate() {
            data[[0, i * 2]] = v;
            mask[[0, i * 2]] = true;
        }
        let (labels, _) = label_components(&mask);
        let clusters = build_clusters(&data, &labels, 2);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].total_intensity, 40.0);
        assert_eq!(clusters[1].total_intensity, 30.0);
    }
}
