use rayon::prelude::*;

use crate::catalog::Star;
pub use crate::vector::arc;

/// A canonical triangle pattern: three catalog star IDs in catalog-discovery
/// order, their three pairwise arcs sorted ascending (`a <= b <= c`) for
/// range lookup, and those same arcs in discovery-pair order
/// `(arc(ids.0,ids.1), arc(ids.0,ids.2), arc(ids.1,ids.2))` so a matcher can
/// later recover which observed direction corresponds to which star ID
/// without needing to re-touch the catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub star_ids: (i64, i64, i64),
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub raw_arcs: (f64, f64, f64),
}

/// An ordered, immutable index of triangles, sorted ascending by `a`, built
/// once from a catalog and thereafter read-only and freely shareable across
/// concurrent matchers.
#[derive(Clone, Debug, Default)]
pub struct TriangleIndex {
    triangles: Vec<Triangle>,
}

impl TriangleIndex {
    /// Enumerate every ordered triple `i < j < k` of catalog stars whose
    /// three pairwise arcs all fit within `max_fov_rad`, canonicalize the
    /// arcs, and sort the result ascending by the smallest arc.
    ///
    /// The outer two loops prune aggressively on the pairwise FOV cutoff,
    /// which is what keeps this tractable despite the O(|catalog|^3)
    /// worst case; the innermost loop runs in parallel across `k` because
    /// it dominates the work at catalog scale.
    pub fn build(catalog: &[Star], max_fov_rad: f64) -> Self {
        let n = catalog.len();
        let mut triangles = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let dist_ij = arc(catalog[i].direction(), catalog[j].direction());
                if dist_ij > max_fov_rad {
                    continue;
                }

                let found: Vec<Triangle> = (j + 1..n)
                    .into_par_iter()
                    .filter_map(|k| {
                        let dist_ik = arc(catalog[i].direction(), catalog[k].direction());
                        if dist_ik > max_fov_rad {
                            return None;
                        }
                        let dist_jk = arc(catalog[j].direction(), catalog[k].direction());
                        if dist_jk > max_fov_rad {
                            return None;
                        }

                        let mut sides = [dist_ij, dist_ik, dist_jk];
                        sides.sort_unstable_by(|x, y| x.partial_cmp(y).unwrap());

                        Some(Triangle {
                            star_ids: (catalog[i].id, catalog[j].id, catalog[k].id),
                            a: sides[0],
                            b: sides[1],
                            c: sides[2],
                            raw_arcs: (dist_ij, dist_ik, dist_jk),
                        })
                    })
                    .collect();
                triangles.extend(found);
            }
        }

        triangles.sort_unstable_by(|t1, t2| t1.a.partial_cmp(&t2.a).unwrap());
        Self { triangles }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// All entries with `a` in `[lower, upper]`, using a binary-search lower
    /// bound followed by a forward scan, as the matcher needs.
    pub fn range_by_a(&self, lower: f64, upper: f64) -> &[Triangle] {
        let start = self.triangles.partition_point(|t| t.a < lower);
        let end = start
            + self.triangles[start..]
                .iter()
                .take_while(|t| t.a <= upper)
                .count();
        &self.triangles[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }
}
