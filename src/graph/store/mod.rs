//! A load-once undirected graph over dense node indices.
//!
//! Memory layout:
//! - `adjacency`: one `Vec<NodeId>` per node, symmetric
//! - `edges`: the full edge list in arrival order, replayed as the stream
//!
//! After [`Graph::load`] or [`Graph::from_edges`] every adjacency list is
//! sorted and duplicate-free, and the edge list holds each unordered pair once,
//! at its first arrival.

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use tracing::info;

use super::{idx, Edge, NodeId};
use crate::error::{Error, Result};

mod counting;

/// A declarative edge source: declared sizes plus 0-based endpoint pairs.
///
/// Endpoints are signed so that sources can report ids that fall below the
/// valid range; [`Graph::load`] rejects them.
#[derive(Debug, Clone, Default)]
pub struct EdgeListing {
    /// Declared number of nodes.
    pub node_count: usize,
    /// Declared number of edges, if the source states one.
    pub declared_edges: Option<usize>,
    /// Endpoint pairs in stream order.
    pub edges: Vec<(i64, i64)>,
}

/// A static undirected graph with exact square counting.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | No duplicate detection |
/// | `degree` | \(O(1)\) | returns `Vec::len` |
/// | `max_degree` | \(O(n)\) | Scans all nodes |
/// | `compute_degeneracy` | \(O((n + m) \log n)\) | Lazy-deletion min-heap |
/// | `exact_square_count` | \(O(m \cdot \alpha)\) | Chiba–Nishizeki, `α` = arboricity |
/// | `count_squares_completed_by_edge` | \(O(d_u d_v \log d)\) | Binary search when normalized |
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<Edge>,
    normalized: bool,
}

impl Graph {
    /// Creates an empty graph with `node_count` isolated nodes.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            normalized: true,
        }
    }

    /// Builds a graph from an edge iterator, growing the node range as needed.
    ///
    /// Self-loops are dropped and adjacency lists are normalized.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::default();
        for (u, v) in edges {
            graph.push_edge(u, v, true);
        }
        graph.normalize();
        graph
    }

    /// Loads every edge of `listing`, then normalizes the adjacency lists.
    ///
    /// # Errors
    /// - [`Error::NodeOutOfRange`] if an endpoint lies outside `[0, node_count)`
    /// - [`Error::Format`] if the realized edge count (self-loops dropped)
    ///   differs from the declared one
    pub fn load(listing: EdgeListing) -> Result<Self> {
        let EdgeListing {
            node_count,
            declared_edges,
            edges,
        } = listing;

        let mut graph = Self::with_nodes(node_count);
        graph.edges.reserve(edges.len());
        for (u, v) in edges {
            let u = checked_node(u, node_count)?;
            let v = checked_node(v, node_count)?;
            graph.add_edge(u, v, false)?;
        }

        if let Some(declared) = declared_edges {
            if graph.m() != declared {
                return Err(Error::format(format!(
                    "declared {declared} edges but read {}",
                    graph.m()
                )));
            }
        }

        graph.normalize();
        info!(n = graph.n(), m = graph.m(), "graph loaded");
        Ok(graph)
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Self-loops are silently ignored. Duplicates are not detected.
    ///
    /// # Errors
    /// Returns [`Error::NodeOutOfRange`] if an endpoint is outside the current
    /// node range and `allow_growth` is `false`. With `allow_growth` the range
    /// is extended to fit.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, allow_growth: bool) -> Result<()> {
        if !allow_growth {
            let n = self.n();
            if let Some(&node) = [u, v].iter().find(|&&x| idx(x) >= n) {
                return Err(Error::NodeOutOfRange {
                    node: i64::from(node),
                    node_count: n,
                });
            }
        }
        self.push_edge(u, v, allow_growth);
        Ok(())
    }

    fn push_edge(&mut self, u: NodeId, v: NodeId, grow: bool) {
        let needed = idx(u.max(v)) + 1;
        if grow && needed > self.adjacency.len() {
            self.adjacency.resize_with(needed, Vec::new);
        }
        if u == v {
            return;
        }
        self.adjacency[idx(u)].push(v);
        self.adjacency[idx(v)].push(u);
        self.edges.push((u, v));
        self.normalized = false;
    }

    /// Sorts and de-duplicates every adjacency list and drops repeated
    /// edges from the stream, keeping the first arrival of each pair.
    pub fn normalize(&mut self) {
        for nbrs in &mut self.adjacency {
            nbrs.sort_unstable();
            nbrs.dedup();
            nbrs.shrink_to_fit();
        }
        let mut seen = FxHashSet::default();
        self.edges.retain(|&(u, v)| seen.insert((u.min(v), u.max(v))));
        self.normalized = true;
    }

    /// Adjacency lists with repeated neighbors removed; borrowed once normalized.
    pub(crate) fn simple_adjacency(&self) -> Cow<'_, [Vec<NodeId>]> {
        if self.normalized {
            return Cow::Borrowed(&self.adjacency[..]);
        }
        let mut adjacency = self.adjacency.clone();
        for nbrs in &mut adjacency {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Cow::Owned(adjacency)
    }

    /// Number of nodes.
    #[inline]
    pub fn n(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges in the stream.
    ///
    /// Self-loops are never stored. Repeated edges count until
    /// [`normalize`](Self::normalize) drops them.
    #[inline]
    pub fn m(&self) -> usize {
        self.edges.len()
    }

    /// Degree of `node`, counting repeated edges until normalized.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[idx(node)].len()
    }

    /// Largest degree over all nodes, `0` for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Neighbors of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[idx(node)]
    }

    /// The edge stream in arrival order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if `{u, v}` is an edge.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        let nbrs = &self.adjacency[idx(u)];
        if self.normalized {
            nbrs.binary_search(&v).is_ok()
        } else {
            nbrs.contains(&v)
        }
    }

    /// Computes the degeneracy by repeatedly peeling a minimum-degree node.
    ///
    /// Stale heap entries are skipped on pop rather than updated in place.
    pub fn compute_degeneracy(&self) -> usize {
        let n = self.n();
        let adjacency = self.simple_adjacency();
        let mut degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();
        let mut removed = vec![false; n];
        let mut heap: BinaryHeap<Reverse<(usize, usize)>> =
            degree.iter().enumerate().map(|(u, &d)| Reverse((d, u))).collect();

        let mut degeneracy = 0;
        while let Some(Reverse((d, u))) = heap.pop() {
            if removed[u] {
                continue;
            }
            removed[u] = true;
            degeneracy = degeneracy.max(d);
            for &v in &adjacency[u] {
                let v = idx(v);
                if !removed[v] {
                    degree[v] -= 1;
                    heap.push(Reverse((degree[v], v)));
                }
            }
        }
        degeneracy
    }
}

fn checked_node(node: i64, node_count: usize) -> Result<NodeId> {
    usize::try_from(node)
        .ok()
        .filter(|&u| u < node_count)
        .and_then(|u| NodeId::try_from(u).ok())
        .ok_or(Error::NodeOutOfRange { node, node_count })
}

#[cfg(test)]
mod tests;
