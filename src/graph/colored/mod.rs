//! A two-colored undirected graph with true deletion.
//!
//! Each edge carries a [`Color`]. The same endpoint pair may exist in both
//! colors at once; the two copies are independent edges.
//!
//! Memory layout:
//! - `adjacency[c]`: one `Vec<NodeId>` per node for color `c`, symmetric per color
//! - `edge_counts[c]`: number of color-`c` edges, maintained incrementally
//!
//! Both adjacency arrays always have the same length and grow on demand.

use super::{idx, NodeId};

mod counting;

/// Edge color.
///
/// In induced sampling, `Sampled` (color 0) marks reservoir edges and
/// `Induced` (color 1) marks edges seen between already-sampled nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Color 0.
    Sampled,
    /// Color 1.
    Induced,
}

impl Color {
    /// Both colors, in index order.
    pub const ALL: [Color; 2] = [Color::Sampled, Color::Induced];

    /// Numeric tag of the color (`0` or `1`).
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Color::Sampled => 0,
            Color::Induced => 1,
        }
    }
}

/// A graph with two edge colors over a shared, growing node range.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Grows both arrays if needed |
/// | `remove_edge` | \(O(d_u + d_v)\) | Removes one occurrence per endpoint |
/// | `remove_node` | \(O(\sum_{v \in N(u)} d_v)\) | Both colors |
/// | `degree` | \(O(1)\) | per color or combined |
/// | `bicolored_square_count` | \(O(m \cdot \alpha)\) | plus set overhead per wedge |
#[derive(Debug, Clone, Default)]
pub struct ColoredGraph {
    adjacency: [Vec<Vec<NodeId>>; 2],
    edge_counts: [usize; 2],
}

impl ColoredGraph {
    /// Creates an empty colored graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge `{u, v}` with `color`, growing the node range to fit.
    ///
    /// Self-loops are ignored.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, color: Color) {
        let needed = idx(u.max(v)) + 1;
        if needed > self.n_max() {
            for lists in &mut self.adjacency {
                lists.resize_with(needed, Vec::new);
            }
        }
        if u == v {
            return;
        }
        let lists = &mut self.adjacency[color.index()];
        lists[idx(u)].push(v);
        lists[idx(v)].push(u);
        self.edge_counts[color.index()] += 1;
    }

    /// Removes one copy of the edge `{u, v}` with `color`.
    ///
    /// Returns `false` (and changes nothing) if no such edge exists.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId, color: Color) -> bool {
        if idx(u.max(v)) >= self.n_max() || u == v {
            return false;
        }
        let lists = &mut self.adjacency[color.index()];
        if !remove_one(&mut lists[idx(u)], v) {
            return false;
        }
        remove_one(&mut lists[idx(v)], u);
        self.edge_counts[color.index()] -= 1;
        true
    }

    /// Removes every edge incident to `u`, in both colors.
    ///
    /// The node index stays allocated with empty lists.
    pub fn remove_node(&mut self, u: NodeId) {
        if idx(u) >= self.n_max() {
            return;
        }
        for color in Color::ALL {
            let c = color.index();
            let nbrs = std::mem::take(&mut self.adjacency[c][idx(u)]);
            for &v in &nbrs {
                remove_one(&mut self.adjacency[c][idx(v)], u);
            }
            self.edge_counts[c] -= nbrs.len();
        }
    }

    /// Size of the node-index space (largest index ever seen plus one).
    #[inline]
    pub fn n_max(&self) -> usize {
        self.adjacency[0].len()
    }

    /// Number of edges of `color`, or of both colors when `None`.
    #[inline]
    pub fn m(&self, color: Option<Color>) -> usize {
        match color {
            Some(c) => self.edge_counts[c.index()],
            None => self.edge_counts[0] + self.edge_counts[1],
        }
    }

    /// Degree of `node` in `color`, or combined over both colors when `None`.
    ///
    /// Nodes outside the index space have degree `0`.
    #[inline]
    pub fn degree(&self, node: NodeId, color: Option<Color>) -> usize {
        let len = |c: usize| self.adjacency[c].get(idx(node)).map_or(0, Vec::len);
        match color {
            Some(c) => len(c.index()),
            None => len(0) + len(1),
        }
    }

    /// Neighbors of `node` in `color`.
    ///
    /// # Panics
    /// Panics if `node` is outside the index space.
    #[inline]
    pub fn neighbors(&self, node: NodeId, color: Color) -> &[NodeId] {
        &self.adjacency[color.index()][idx(node)]
    }
}

fn remove_one(list: &mut Vec<NodeId>, target: NodeId) -> bool {
    match list.iter().position(|&x| x == target) {
        Some(pos) => {
            list.swap_remove(pos);
            true
        }
        None => false,
    }
}
