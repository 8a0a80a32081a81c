//! Square counting on the uncolored store.

use std::borrow::Cow;

use super::Graph;
use crate::graph::{idx, processing_order, NodeId};

impl Graph {
    /// Counts the 4-cycles of the graph exactly (Chiba–Nishizeki).
    ///
    /// Nodes are consumed in descending degree order. For each node `u`, every
    /// two-step path `u - v - w` in the remaining graph increments a counter
    /// for `w`; a counter value `c` then yields `c·(c-1)/2` squares on the
    /// diagonal `u - w`. `u` is unlinked from its neighbors as it is consumed,
    /// so every square is counted exactly once.
    ///
    /// Works on a private, duplicate-free copy of the adjacency lists; `self`
    /// is unchanged and repeated edges count once.
    pub fn exact_square_count(&self) -> u64 {
        let mut work = self.simple_adjacency().into_owned();
        let degrees: Vec<usize> = work.iter().map(Vec::len).collect();
        let order = processing_order(&degrees);

        let mut common = vec![0u64; self.n()];
        let mut touched: Vec<NodeId> = Vec::new();
        let mut total = 0u64;

        for u in order {
            let nbrs = std::mem::take(&mut work[idx(u)]);
            for &v in &nbrs {
                let v_nbrs = &mut work[idx(v)];
                v_nbrs.retain(|&w| w != u);
                for &w in v_nbrs.iter() {
                    let slot = &mut common[idx(w)];
                    if *slot == 0 {
                        touched.push(w);
                    }
                    *slot += 1;
                }
            }

            for w in touched.drain(..) {
                let c = std::mem::take(&mut common[idx(w)]);
                total += c * c.saturating_sub(1) / 2;
            }
        }
        total
    }

    /// Counts the squares that the edge `{u, v}` closes in this graph.
    ///
    /// Every pair `a ∈ N(u) \ {v}`, `b ∈ N(v) \ {u}` with `{a, b}` an edge is a
    /// square `u - v - b - a`. Repeated edges count once.
    pub fn count_squares_completed_by_edge(&self, u: NodeId, v: NodeId) -> u64 {
        let (u_nbrs, v_nbrs) = (self.distinct_neighbors(u), self.distinct_neighbors(v));
        let mut count = 0;
        for &a in u_nbrs.iter() {
            if a == v {
                continue;
            }
            for &b in v_nbrs.iter() {
                if b != u && self.has_edge(a, b) {
                    count += 1;
                }
            }
        }
        count
    }

    fn distinct_neighbors(&self, node: NodeId) -> Cow<'_, [NodeId]> {
        let nbrs = self.neighbors(node);
        if self.normalized {
            return Cow::Borrowed(nbrs);
        }
        let mut nbrs = nbrs.to_vec();
        nbrs.sort_unstable();
        nbrs.dedup();
        Cow::Owned(nbrs)
    }
}
