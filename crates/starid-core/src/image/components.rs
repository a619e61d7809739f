use ndarray::Array2;

/// Disjoint-set over label indices with full path compression, backing the
/// two-pass connected-components labeler.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: vec![0; capacity.max(2)],
        }
    }

    fn make_label(&mut self, label: u32) {
        if label as usize >= self.parent.len() {
            self.parent.resize((label as usize + 1) * 2, 0);
        }
        self.parent[label as usize] = label;
    }

    fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Path compression: re-point every visited node directly at root.
        let mut cur = x;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Attach the root of `b` under the root of `a`.
    fn unite(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb as usize] = ra;
        }
    }
}

/// Two-pass 4-connectivity connected-components labeling of a foreground
/// mask, in raster order. Labels start at 1; 0 means background.
///
/// Returns the resolved label array (every foreground pixel relabeled to
/// its union-find root) and the number of distinct components found.
pub fn label_components(mask: &Array2<bool>) -> (Array2<u32>, usize) {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return (Array2::zeros((h, w)), 0);
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut uf = UnionFind::with_capacity(h * w / 2 + 2);
    let mut next_label: u32 = 1;

    for y in 0..h {
        for x in 0..w {
            if !mask[[y, x]] {
                continue;
            }

            let left = if x > 0 { labels[[y, x - 1]] } else { 0 };
            let up = if y > 0 { labels[[y - 1, x]] } else { 0 };

            labels[[y, x]] = match (left, up) {
                (0, 0) => {
                    uf.make_label(next_label);
                    let l = next_label;
                    next_label += 1;
                    l
                }
                (l, 0) => l,
                (0, t) => t,
                (l, t) => {
                    if l != t {
                        uf.unite(l, t);
                    }
                    l
                }
            };
        }
    }

    for y in 0..h {
        for x in 0..w {
            let lbl = labels[[y, x]];
            if lbl != 0 {
                labels[[y, x]] = uf.find(lbl);
            }
        }
    }

    let mut roots: Vec<u32> = labels.iter().copied().filter(|&l| l != 0).collect();
    roots.sort_unstable();
    roots.dedup();

    (labels, roots.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario B: 4-connectivity must not merge across the diagonal.
    #[test]
    fn scenario_b_three_components() {
        let mask_data = [
            true, true, false, true, //
            true, false, false, true, //
            false, false, true, true,
        ];
        let mask = Array2::from_shape_vec((3, 4), mask_data.to_vec()).unwrap();
        let (labels, count) = label_components(&mask);
        assert_eq!(count, 3);

        // The L-shape (0,0),(0,1),(1,0) is one component.
        assert_eq!(labels[[0, 0]], labels[[0, 1]]);
        assert_eq!(labels[[0, 0]], labels[[1, 0]]);
        // The right column (0,3),(1,3),(2,2),(2,3) is one component.
        assert_eq!(labels[[0, 3]], labels[[1, 3]]);
        assert_eq!(labels[[0, 3]], labels[[2, 3]]);
        assert_eq!(labels[[0, 3]], labels[[2, 2]]);
        // The two components are distinct (no diagonal merge).
        assert_ne!(labels[[0, 0]], labels[[0, 3]]);
    }

    #[test]
    fn empty_mask_has_no_components() {
        let mask = Array2::from_elem((4, 4), false);
        let (_, count) = label_components(&mask);
        assert_eq!(count, 0);
    }
}
