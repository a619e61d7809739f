use crate::vector::{cross, normalize, Vec3};

use super::quaternion::Quaternion;

/// A paired `(body direction, inertial direction, weight)` observation.
/// `weight` is reserved for a future weighted solver; TRIAD uses only the
/// first two observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub body: Vec3,
    pub inertial: Vec3,
    pub weight: f64,
}

/// Solve Wahba's two-vector alignment problem by the TRIAD method: build an
/// orthonormal triad in each frame from the first two observations, derive
/// the inertial-to-body rotation matrix `A = W * V^T`, and convert to a
/// quaternion via Stanley's branch-on-trace method.
///
/// Returns `None` if fewer than two observations are supplied, or if either
/// pair is colinear (the cross product used to build the second triad axis
/// collapses to zero and cannot be normalized, per
/// [`crate::vector::normalize`]'s explicit precondition check). Both are
/// precondition violations the caller must avoid; `None` surfaces them
/// instead of silently returning a degenerate rotation.
pub fn solve(observations: &[Observation]) -> Option<Quaternion> {
    if observations.len() < 2 {
        return None;
    }

    let r1 = observations[0].inertial;
    let r2 = observations[1].inertial;
    let b1 = observations[0].body;
    let b2 = observations[1].body;

    let v1 = normalize(r1)?;
    let v2 = normalize(cross(r1, r2))?;
    let v3 = cross(v1, v2);

    let w1 = normalize(b1)?;
    let w2 = normalize(cross(b1, b2))?;
    let w3 = cross(w1, w2);

    // V and W have columns (v1|v2|v3) and (w1|w2|w3) respectively;
    // A = W * V^T, computed directly in row-major form over the raw
    // components (matrix assembly, not vector arithmetic, so it drops to
    // plain arrays at this one boundary).
    let v_rows: [[f64; 3]; 3] = [v1.into(), v2.into(), v3.into()];
    let w_rows: [[f64; 3]; 3] = [w1.into(), w2.into(), w3.into()];
    let mut a = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += w_rows[k][i] * v_rows[k][j];
            }
            a[i][j] = sum;
        }
    }

    Some(Quaternion::from_rotation_matrix(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn obs(body: [f64; 3], inertial: [f64; 3]) -> Observation {
        Observation {
            body: body.into(),
            inertial: inertial.into(),
            weight: 1.0,
        }
    }

    /// Scenario F: identical body/inertial frames give the identity
    /// quaternion.
    #[test]
    fn scenario_f_identity() {
        let observations = vec![
            obs([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            obs([0.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let q = solve(&observations).unwrap();
        assert_abs_diff_eq!(q.w, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.z, 0.0, epsilon = 1e-9);
    }

    /// Scenario G: 90 degree rotation about z.
    #[test]
    fn scenario_g_ninety_about_z() {
        let observations = vec![
            obs([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
            obs([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let q = solve(&observations).unwrap();
        let expected = std::f64::consts::FRAC_PI_4;
        assert_abs_diff_eq!(q.w, expected.cos(), epsilon = 1e-9);
        assert_abs_diff_eq!(q.z, expected.sin(), epsilon = 1e-9);
        assert_abs_diff_eq!(q.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn fewer_than_two_observations_returns_none() {
        let observations = vec![obs([1.0, 0.0, 0.0], [1.0, 0.0, 0.0])];
        assert!(solve(&observations).is_none());
    }

    #[test]
    fn colinear_inertial_pair_returns_none() {
        let observations = vec![
            obs([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            obs([0.0, 1.0, 0.0], [2.0, 0.0, 0.0]), // same direction as r1
        ];
        assert!(solve(&observations).is_none());
    }

    #[test]
    fn colinear_body_pair_returns_none() {
        let observations = vec![
            obs([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            obs([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), // antiparallel to b1
        ];
        assert!(solve(&observations).is_none());
    }

    #[test]
    fn output_is_always_unit_norm() {
        let observations = vec![
            obs([0.3, 0.9, 0.1], [0.6, -0.2, 0.77]),
            obs([0.8, -0.1, 0.2], [-0.1, 0.9, 0.3]),
        ];
        if let Some(q) = solve(&observations) {
            assert_abs_diff_eq!(q.norm_sq(), 1.0, epsilon = 1e-9);
        }
    }
}
