//! The 3-vector type shared by catalog directions, triangle arcs, and TRIAD
//! observations, backed by `geo_nd` rather than hand-rolled array
//! arithmetic — the same crate `atthecodeface-star-catalog-rs` depends on
//! for this identical unit-vector/angular-distance work.

use geo_nd::{Vector, Vector3};

use crate::consts::EPSILON;

/// A 3-vector on the celestial sphere (catalog/body direction) or the
/// camera body frame.
pub type Vec3 = geo_nd::FArray<f64, 3>;

/// Cross product of two 3-vectors.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross_product(&b)
}

/// Normalize a vector, returning `None` if its magnitude is too small to
/// normalize meaningfully. `geo_nd`'s own `normalize` leaves a near-zero
/// vector unmodified rather than signaling failure; this wraps it with the
/// explicit precondition check spec's design notes call for, so a colinear
/// TRIAD pair can't produce a degenerate but nonzero quaternion.
pub fn normalize(v: Vec3) -> Option<Vec3> {
    if v.dot(&v).sqrt() < EPSILON {
        None
    } else {
        Some(v.normalize())
    }
}

/// Great-circle angular distance between two unit vectors, in radians.
pub fn arc(u: Vec3, v: Vec3) -> f64 {
    u.dot(&v).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_of_identical_vectors_is_zero() {
        let v: Vec3 = [1.0, 0.0, 0.0].into();
        assert!(arc(v, v) < 1e-12);
    }

    #[test]
    fn arc_of_orthogonal_vectors_is_right_angle() {
        let u: Vec3 = [1.0, 0.0, 0.0].into();
        let v: Vec3 = [0.0, 1.0, 0.0].into();
        assert!((arc(u, v) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_near_zero_vector() {
        let v: Vec3 = [0.0, 0.0, 0.0].into();
        assert!(normalize(v).is_none());
    }

    #[test]
    fn cross_of_basis_vectors_matches_right_hand_rule() {
        let x: Vec3 = [1.0, 0.0, 0.0].into();
        let y: Vec3 = [0.0, 1.0, 0.0].into();
        let z = cross(x, y);
        let z_arr: [f64; 3] = z.into();
        assert!((z_arr[0]).abs() < 1e-12);
        assert!((z_arr[1]).abs() < 1e-12);
        assert!((z_arr[2] - 1.0).abs() < 1e-12);
    }
}
