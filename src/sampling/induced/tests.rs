//! Tests for the reservoir-induced sampler.

use super::*;

fn run_sampler(edges: &[Edge], capacity: usize, seed: u64) -> InducedSampler {
    let mut sampler = InducedSampler::new(Some(seed));
    sampler.setup(capacity);
    for &e in edges {
        sampler.process(e);
    }
    sampler.finalize();
    for &e in edges {
        sampler.collect_induced(e);
        assert!(sampler.graph().m(Some(Color::Induced)) <= capacity);
    }
    sampler
}

fn grid_edges(side: u32) -> Vec<Edge> {
    let id = |r: u32, c: u32| r * side + c;
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                edges.push((id(r, c), id(r, c + 1)));
            }
            if r + 1 < side {
                edges.push((id(r, c), id(r + 1, c)));
            }
        }
    }
    edges
}

#[test]
fn test_full_capacity_is_exact() {
    // 4x4 grid: 9 unit squares, no others.
    let edges = grid_edges(4);
    let sampler = run_sampler(&edges, edges.len(), 5);
    let stats = sampler.stats();
    assert_eq!(stats.reservoir_len, edges.len());
    assert_eq!(stats.induced_edges, edges.len());
    assert_eq!(stats.removed_sampled_edges, 0);
    assert_eq!(sampler.estimate(), 9);
}

#[test]
fn test_reservoir_matches_color_zero_edges() {
    let edges = grid_edges(6);
    let sampler = run_sampler(&edges, 12, 11);
    let graph = sampler.graph();
    assert_eq!(graph.m(Some(Color::Sampled)), sampler.reservoir().len());
    for &(u, v) in sampler.reservoir() {
        let u = sampler.remap().get(u).unwrap();
        let v = sampler.remap().get(v).unwrap();
        assert!(graph.neighbors(u, Color::Sampled).contains(&v));
    }
}

#[test]
fn test_budget_forces_evictions() {
    let edges = grid_edges(8);
    for seed in 0..20 {
        let sampler = run_sampler(&edges, 20, seed);
        let stats = sampler.stats();
        assert!(stats.induced_edges <= 20);
        assert_eq!(stats.stream_len, edges.len());
        assert_eq!(stats.processed_edges, edges.len());
        assert_eq!(stats.reservoir_len + stats.removed_sampled_edges, 20);
    }
}

#[test]
fn test_induced_edges_join_sampled_nodes_only() {
    let edges = grid_edges(5);
    let sampler = run_sampler(&edges, 10, 3);
    let graph = sampler.graph();
    for u in 0..graph.n_max() as NodeId {
        if graph.degree(u, Some(Color::Induced)) > 0 {
            assert!(graph.degree(u, Some(Color::Sampled)) > 0);
        }
    }
}

#[test]
fn test_estimate_is_idempotent() {
    let edges = grid_edges(6);
    let sampler = run_sampler(&edges, 15, 8);
    let first = sampler.estimate();
    assert_eq!(sampler.estimate(), first);
    assert_eq!(sampler.stats(), sampler.clone().stats());
}

#[test]
fn test_empty_stream_estimates_zero() {
    let sampler = run_sampler(&[], 4, 1);
    assert_eq!(sampler.estimate(), 0);
    assert_eq!(sampler.stats(), SamplerStats::default());
}

#[test]
fn test_setup_clears_previous_run() {
    let edges = grid_edges(3);
    let mut sampler = run_sampler(&edges, 4, 2);
    sampler.setup(6);
    assert_eq!(sampler.capacity(), 6);
    assert!(sampler.remap().is_empty());
    assert_eq!(sampler.graph().m(None), 0);
    assert_eq!(sampler.stats(), SamplerStats::default());
}
