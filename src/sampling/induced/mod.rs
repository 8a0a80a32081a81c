//! Reservoir-induced sampling on a colored graph.
//!
//! Lifecycle, each phase driven once by the owning estimator:
//! 1. [`setup`](InducedSampler::setup): fix the reservoir capacity
//! 2. [`process`](InducedSampler::process): one call per stream edge (first pass)
//! 3. [`finalize`](InducedSampler::finalize): load the reservoir as color-0 edges
//! 4. [`collect_induced`](InducedSampler::collect_induced): one call per stream
//!    edge (second pass), adding color-1 edges between sampled nodes while
//!    evicting reservoir edges to keep the color-1 count within the budget
//! 5. [`estimate`](InducedSampler::estimate): read-only scale-up
//!
//! Node ids are renumbered on first sight during `finalize`. Each sampler owns
//! its renumbering, its colored graph and its generator.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::reservoir::EdgeReservoir;
use crate::estimators::round_estimate;
use crate::graph::{Color, ColoredGraph, Edge, NodeId, NodeRemap};

/// Counters describing one sampler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerStats {
    /// Edges offered to the reservoir.
    pub processed_edges: usize,
    /// Total stream length observed in the first pass.
    pub stream_len: usize,
    /// Reservoir edges still retained.
    pub reservoir_len: usize,
    /// Color-1 edges currently held.
    pub induced_edges: usize,
    /// Reservoir edges evicted to respect the budget.
    pub removed_sampled_edges: usize,
    /// Nodes dropped after losing their last reservoir edge.
    pub removed_nodes: usize,
}

/// A reservoir sampler that also keeps the edges induced on its sampled nodes.
#[derive(Debug, Clone)]
pub struct InducedSampler {
    reservoir: EdgeReservoir,
    graph: ColoredGraph,
    remap: NodeRemap,
    space: usize,
    stream_len: usize,
    removed_nodes: usize,
    removed_sampled_edges: usize,
    finalized: bool,
}

impl InducedSampler {
    /// Creates a sampler with zero capacity; call [`setup`](Self::setup) next.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            reservoir: EdgeReservoir::new(0, seed),
            graph: ColoredGraph::new(),
            remap: NodeRemap::new(),
            space: 0,
            stream_len: 0,
            removed_nodes: 0,
            removed_sampled_edges: 0,
            finalized: false,
        }
    }

    /// Fixes the reservoir capacity and clears all per-run state.
    ///
    /// `capacity` also bounds the number of induced edges.
    pub fn setup(&mut self, capacity: usize) {
        self.space = capacity;
        self.reservoir.reset(capacity);
        self.remap.clear();
        self.graph = ColoredGraph::new();
        self.stream_len = 0;
        self.removed_nodes = 0;
        self.removed_sampled_edges = 0;
        self.finalized = false;
    }

    /// First pass: offers one stream edge to the reservoir.
    pub fn process(&mut self, edge: Edge) {
        debug_assert!(!self.finalized, "process called after finalize");
        self.reservoir.offer(edge);
        self.stream_len += 1;
    }

    /// Renumbers the reservoir endpoints and inserts every reservoir edge
    /// with color 0.
    pub fn finalize(&mut self) {
        self.reservoir.seal();
        for &(u, v) in self.reservoir.edges() {
            let u = self.remap.get_or_insert(u);
            let v = self.remap.get_or_insert(v);
            self.graph.add_edge(u, v, Color::Sampled);
        }
        self.finalized = true;
    }

    /// Second pass: records `edge` as a color-1 edge if both endpoints still
    /// carry reservoir edges, then evicts reservoir edges from the back until
    /// the color-1 count fits the budget.
    ///
    /// An evicted edge's endpoint that is left without color-0 edges is
    /// removed from the graph together with its color-1 edges.
    pub fn collect_induced(&mut self, (u, v): Edge) {
        debug_assert!(self.finalized, "collect_induced called before finalize");
        let (Some(u), Some(v)) = (self.remap.get(u), self.remap.get(v)) else {
            return;
        };
        if self.graph.degree(u, Some(Color::Sampled)) > 0
            && self.graph.degree(v, Some(Color::Sampled)) > 0
        {
            self.graph.add_edge(u, v, Color::Induced);
        }

        while self.graph.m(Some(Color::Induced)) > self.space {
            let Some((x, y)) = self.reservoir.pop() else {
                break;
            };
            self.evict(x, y);
        }
    }

    fn evict(&mut self, x: NodeId, y: NodeId) {
        let (Some(x), Some(y)) = (self.remap.get(x), self.remap.get(y)) else {
            return;
        };
        self.graph.remove_edge(x, y, Color::Sampled);
        self.removed_sampled_edges += 1;

        for node in [x, y] {
            if self.graph.degree(node, Some(Color::Sampled)) == 0 {
                self.graph.remove_node(node);
                self.removed_nodes += 1;
            }
        }
        trace!(
            x,
            y,
            induced = self.graph.m(Some(Color::Induced)),
            "evicted reservoir edge"
        );
    }

    /// Scales the alternating-square count of the sample to the whole stream.
    ///
    /// With `p = reservoir_len / stream_len`, returns
    /// `round(bicolored_count / 2 / p²)`; `0` for an empty stream or sample.
    pub fn estimate(&self) -> u64 {
        if self.stream_len == 0 || self.reservoir.is_empty() {
            return 0;
        }
        let prob = self.reservoir.len() as f64 / self.stream_len as f64;
        let count = self.graph.bicolored_square_count() as f64;
        round_estimate(count / prob / prob / 2.0)
    }

    /// Counters of the current run.
    pub fn stats(&self) -> SamplerStats {
        SamplerStats {
            processed_edges: self.reservoir.processed(),
            stream_len: self.stream_len,
            reservoir_len: self.reservoir.len(),
            induced_edges: self.graph.m(Some(Color::Induced)),
            removed_sampled_edges: self.removed_sampled_edges,
            removed_nodes: self.removed_nodes,
        }
    }

    /// Capacity fixed by the last [`setup`](Self::setup).
    pub fn capacity(&self) -> usize {
        self.space
    }

    /// The sampled colored graph (compact node indices).
    pub fn graph(&self) -> &ColoredGraph {
        &self.graph
    }

    /// Reservoir edges still retained, in slot order; the last slot is evicted first.
    pub fn reservoir(&self) -> &[Edge] {
        self.reservoir.edges()
    }

    /// The renumbering from stream ids to compact indices.
    pub fn remap(&self) -> &NodeRemap {
        &self.remap
    }
}

#[cfg(test)]
mod tests;
