//! Two-pass reservoir baseline.

use tracing::debug;

use super::{check_budget, round_estimate};
use crate::error::Result;
use crate::graph::{Graph, NodeRemap};
use crate::sampling::EdgeReservoir;

/// Estimates the square count by completing sampled wedges in a second pass.
///
/// Pass 1 reservoir-samples `min(k, m)` edges into a sample graph. Pass 2
/// adds, for every stream edge between sampled nodes, the number of squares
/// it closes in the sample. A square is seen once per edge that closes it
/// over the other three, so the sum is inflated by `1/p³` and divided by 4.
///
/// # Errors
/// Returns [`Error::Config`](crate::Error::Config) for `k = 0`.
pub fn multipass_baseline(graph: &Graph, k: usize, seed: Option<u64>) -> Result<u64> {
    check_budget(k)?;
    if graph.m() == 0 {
        return Ok(0);
    }

    let mut reservoir = EdgeReservoir::new(k.min(graph.m()), seed);
    for &edge in graph.edges() {
        reservoir.offer(edge);
    }

    let mut remap = NodeRemap::new();
    let sample = Graph::from_edges(
        reservoir
            .into_edges()
            .into_iter()
            .map(|(u, v)| (remap.get_or_insert(u), remap.get_or_insert(v))),
    );

    let mut raw = 0u64;
    for &(u, v) in graph.edges() {
        if let (Some(u), Some(v)) = (remap.get(u), remap.get(v)) {
            raw += sample.count_squares_completed_by_edge(u, v);
        }
    }

    let prob = sample.m() as f64 / graph.m() as f64;
    debug!(sampled = sample.m(), prob, raw, "multipass sample");
    Ok(round_estimate(raw as f64 / prob.powi(3) / 4.0))
}
