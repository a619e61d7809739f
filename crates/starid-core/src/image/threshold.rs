use ndarray::Array2;

/// Single-pass mean/stddev/max statistics over a pixel raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub stddev: f64,
    pub max: f64,
}

/// Compute mean, standard deviation, and maximum in one pass over the
/// pixel sums, `sigma = sqrt(sum_sq/n - mean^2)`.
pub fn compute_statistics(data: &Array2<f64>) -> Statistics {
    let n = data.len() as f64;
    let mut sum = 0.0_f64;
    let mut sum_sq = 0.0_f64;
    let mut max = f64::MIN;
    for &v in data.iter() {
        sum += v;
        sum_sq += v * v;
        if v > max {
            max = v;
        }
    }
    let mean = sum / n;
    let variance = (sum_sq / n - mean * mean).max(0.0);
    Statistics {
        mean,
        stddev: variance.sqrt(),
        max,
    }
}

/// Result of detection-threshold computation, including whether the
/// saturation-guard fallback was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    pub value: f64,
    pub fallback_applied: bool,
}

/// Compute the detection threshold `T = mean + k*sigma`. If that threshold
/// is not below the image maximum (no significant above-background feature
/// under the k*sigma rule, e.g. a single saturated star dominating the
/// frame), fall back to `T = mean + 0.8*(max - mean)` and flag it so the
/// caller can log a warning.
pub fn compute_threshold(stats: &Statistics, threshold_constant: f64) -> Threshold {
    let k_sigma = stats.mean + threshold_constant * stats.stddev;
    if k_sigma < stats.max {
        Threshold {
            value: k_sigma,
            fallback_applied: false,
        }
    } else {
        Threshold {
            value: stats.mean + 0.8 * (stats.max - stats.mean),
            fallback_applied: true,
        }
    }
}

/// Boolean foreground mask: `mask[i] = pixel[i] >= threshold`.
pub fn foreground_mask(data: &Array2<f64>, threshold: f64) -> Array2<bool> {
    data.mapv(|v| v >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_image_has_no_saturated_feature() {
        let data = Array2::from_elem((4, 4), 10.0);
        let stats = compute_statistics(&data);
        assert_eq!(stats.stddev, 0.0);
        let t = compute_threshold(&stats, 5.0);
        assert!(t.fallback_applied);
        let mask = foreground_mask(&data, t.value);
        // 10.0 >= 10.0 + 0.8*(10-10) == 10.0, so a constant image is
        // entirely at threshold and mask is all-true; but no cluster
        // carries signal above background, which the caller handles via
        // empty statistics elsewhere. Here we only check the arithmetic.
        assert!(mask.iter().all(|&m| m));
    }

    #[test]
    fn saturation_guard_matches_scenario_a() {
        let mut pixels = vec![10.0_f64; 16];
        pixels[1 * 4 + 2] = 1000.0;
        let data = Array2::from_shape_vec((4, 4), pixels).unwrap();
        let stats = compute_statistics(&data);
        assert!((stats.mean - 71.875).abs() < 1e-9);
        // spec.md's worked example rounds sigma to ~242; the exact
        // population stddev for these pixel values is ~239.64.
        assert!((stats.stddev - 239.64).abs() < 0.01);
        let t = compute_threshold(&stats, 5.0);
        assert!(t.fallback_applied);
        assert!((t.value - 814.375).abs() < 1e-6);
        let mask = foreground_mask(&data, t.value);
        assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
        assert!(mask[[1, 2]]);
    }
}
