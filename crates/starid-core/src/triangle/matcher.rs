use super::index::{arc, Triangle, TriangleIndex};
use crate::vector::Vec3;

/// A matched triangle together with the correspondence between each
/// observed direction and the catalog star ID it was matched to. Resolves
/// the open question left by the canonical (a,b,c) representation: knowing
/// which three stars are present is not the same as knowing which observed
/// direction maps to which catalog ID.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchedTriangle {
    pub star_ids: (i64, i64, i64),
    /// `correspondence.0` is the catalog ID matched to the first observed
    /// direction, `.1` to the second, `.2` to the third.
    pub correspondence: (i64, i64, i64),
    pub error: f64,
}

/// Match three observed unit directions against the triangle index.
///
/// Canonicalizes the observed arcs the same way the index was built, range
/// scans by the smallest arc within `tolerance_rad`, accepts entries whose
/// other two arcs also fall within tolerance, and keeps the one minimizing
/// the L1 arc error. Among accepted entries the observed-to-catalog
/// correspondence is then resolved so a caller can feed TRIAD the right
/// (body, inertial) pairs. Returns `None` if nothing is accepted (the
/// source's `star1 == -1` sentinel, expressed as an option per spec's own
/// redesign note).
pub fn match_triangle(
    observed: [Vec3; 3],
    index: &TriangleIndex,
    tolerance_rad: f64,
) -> Option<MatchedTriangle> {
    let [s1, s2, s3] = observed;
    let d12 = arc(s1, s2);
    let d13 = arc(s1, s3);
    let d23 = arc(s2, s3);

    let mut sides = [d12, d13, d23];
    sides.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
    let (obs_a, obs_b, obs_c) = (sides[0], sides[1], sides[2]);

    let candidates = index.range_by_a(obs_a - tolerance_rad, obs_a + tolerance_rad);

    let mut best: Option<(Triangle, f64)> = None;
    for t in candidates {
        if (t.b - obs_b).abs() < tolerance_rad && (t.c - obs_c).abs() < tolerance_rad {
            let err = (t.a - obs_a).abs() + (t.b - obs_b).abs() + (t.c - obs_c).abs();
            if best.map(|(_, e)| err < e).unwrap_or(true) {
                best = Some((*t, err));
            }
        }
    }

    let (triangle, error) = best?;
    let correspondence = resolve_correspondence(triangle, (d12, d13, d23));

    Some(MatchedTriangle {
        star_ids: triangle.star_ids,
        correspondence,
        error,
    })
}

const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Look up the stored discovery-order arc between catalog slots `x` and `y`
/// (slots 0,1,2 correspond to `triangle.star_ids.{0,1,2}`).
fn pair_arc(raw_arcs: (f64, f64, f64), x: usize, y: usize) -> f64 {
    match (x.min(y), x.max(y)) {
        (0, 1) => raw_arcs.0,
        (0, 2) => raw_arcs.1,
        (1, 2) => raw_arcs.2,
        _ => unreachable!("pair_arc called with slot >= 3"),
    }
}

/// Try every permutation of the triangle's three catalog IDs against the
/// three observed slots and keep the one whose predicted pairwise arcs
/// (read off the triangle's discovery-order arcs) best match the observed
/// pairwise arcs `(d12, d13, d23)` by sum of absolute differences. With only
/// three elements there are six permutations, so exhaustive search is exact
/// and effectively free.
fn resolve_correspondence(triangle: Triangle, observed_pairs: (f64, f64, f64)) -> (i64, i64, i64) {
    let ids = [triangle.star_ids.0, triangle.star_ids.1, triangle.star_ids.2];
    let (d12, d13, d23) = observed_pairs;

    let mut best_perm = PERMUTATIONS[0];
    let mut best_err = f64::INFINITY;

    for perm in PERMUTATIONS {
        let predicted_12 = pair_arc(triangle.raw_arcs, perm[0], perm[1]);
        let predicted_13 = pair_arc(triangle.raw_arcs, perm[0], perm[2]);
        let predicted_23 = pair_arc(triangle.raw_arcs, perm[1], perm[2]);
        let err = (predicted_12 - d12).abs() + (predicted_13 - d13).abs() + (predicted_23 - d23).abs();
        if err < best_err {
            best_err = err;
            best_perm = perm;
        }
    }

    (ids[best_perm[0]], ids[best_perm[1]], ids[best_perm[2]])
}
