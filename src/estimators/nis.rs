//! Node-hash threshold sampling.

use tracing::debug;

use super::{check_budget, round_estimate};
use crate::error::Result;
use crate::graph::{Graph, NodeRemap};
use crate::hash::TabulationHasher;
use crate::sampling::ThresholdSample;

/// Estimates the square count from the bottom-`k` edges by endpoint hash.
///
/// An edge scores `max(h(u), h(v))` under simple tabulation hashing, so an
/// edge is kept iff both endpoints hash below the final threshold. The kept
/// edges form an induced subgraph on the low-hash nodes, each node surviving
/// with probability `p = √(kept / m)`; a square survives with `p⁴`.
///
/// # Errors
/// Returns [`Error::Config`](crate::Error::Config) for `k = 0`.
pub fn nis(graph: &Graph, k: usize, seed: Option<u64>) -> Result<u64> {
    check_budget(k)?;

    let hasher = seed.map_or_else(TabulationHasher::new, TabulationHasher::with_seed);
    let mut sample = ThresholdSample::new(k);
    for &(u, v) in graph.edges() {
        let score = hasher.simple(u).max(hasher.simple(v));
        sample.offer(score, (u, v));
    }

    let kept = sample.len();
    if kept == 0 {
        return Ok(0);
    }

    let mut remap = NodeRemap::new();
    let sample_graph = Graph::from_edges(
        sample
            .edges()
            .map(|(u, v)| (remap.get_or_insert(u), remap.get_or_insert(v))),
    );
    let count = sample_graph.exact_square_count();

    let prob = (kept as f64 / graph.m() as f64).sqrt();
    debug!(kept, threshold = ?sample.threshold(), prob, count, "nis sample");
    Ok(round_estimate(count as f64 / prob.powi(4)))
}
