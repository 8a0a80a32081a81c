//! Graph stores and square-counting kernels.
//!
//! Graph implementations are organized into:
//! - `store`: the load-once undirected graph with exact counting
//! - `colored`: a two-colored, deletable graph used by induced sampling
//! - `remap`: compact renumbering of node identifiers seen in a stream
//! - `konect`: the KONECT edge-list text format

pub mod colored;
pub mod konect;
pub mod remap;
pub mod store;

pub use colored::{Color, ColoredGraph};
pub use remap::NodeRemap;
pub use store::Graph;

/// A dense node identifier.
pub type NodeId = u32;

/// An undirected edge as an unordered pair of endpoints.
pub type Edge = (NodeId, NodeId);

/// Converts a node id into a vector index.
#[inline(always)]
pub(crate) fn idx(node: NodeId) -> usize {
    node as usize
}

/// Node order for Chiba–Nishizeki style counting: descending degree, larger
/// index first on ties.
pub(crate) fn processing_order(degrees: &[usize]) -> Vec<NodeId> {
    let mut nodes: Vec<NodeId> = (0..).take(degrees.len()).collect();
    nodes.sort_unstable_by(|&a, &b| {
        degrees[idx(b)]
            .cmp(&degrees[idx(a)])
            .then_with(|| b.cmp(&a))
    });
    nodes
}
