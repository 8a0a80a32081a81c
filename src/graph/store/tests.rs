//! Tests for the uncolored graph store.

use super::*;

fn complete_graph(n: NodeId) -> Graph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            edges.push((u, v));
        }
    }
    Graph::from_edges(edges)
}

#[test]
fn test_single_square() {
    let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(graph.n(), 4);
    assert_eq!(graph.m(), 4);
    assert_eq!(graph.exact_square_count(), 1);
}

#[test]
fn test_complete_graphs() {
    // K4 has 3 squares, K5 has 15 (3 per 4-subset).
    assert_eq!(complete_graph(4).exact_square_count(), 3);
    assert_eq!(complete_graph(5).exact_square_count(), 15);
}

#[test]
fn test_complete_bipartite() {
    // K(2,3): choose 2 of the 3 right nodes.
    let graph = Graph::from_edges([(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)]);
    assert_eq!(graph.exact_square_count(), 3);
}

#[test]
fn test_triangles_and_trees_have_no_squares() {
    let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
    assert_eq!(triangle.exact_square_count(), 0);

    let star = Graph::from_edges([(0, 1), (0, 2), (0, 3), (0, 4)]);
    assert_eq!(star.exact_square_count(), 0);
}

#[test]
fn test_count_does_not_mutate_store() {
    let graph = complete_graph(5);
    let before: Vec<Vec<NodeId>> = (0..5).map(|u| graph.neighbors(u).to_vec()).collect();
    assert_eq!(graph.exact_square_count(), 15);
    assert_eq!(graph.exact_square_count(), 15);
    for u in 0..5 {
        assert_eq!(graph.neighbors(u), before[u as usize].as_slice());
    }
}

#[test]
fn test_self_loops_dropped_and_duplicates_normalized() {
    let graph = Graph::from_edges([(0, 0), (0, 1), (1, 0), (1, 2)]);
    assert_eq!(graph.m(), 2);
    assert_eq!(graph.edges(), &[(0, 1), (1, 2)]);
    assert_eq!(graph.neighbors(0), &[1]);
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(graph.degree(1), 2);
    assert_eq!(graph.max_degree(), 2);
}

#[test]
fn test_add_edge_range_checks() {
    let mut graph = Graph::with_nodes(3);
    assert!(graph.add_edge(0, 2, false).is_ok());
    let err = graph.add_edge(1, 3, false).unwrap_err();
    assert!(matches!(err, Error::NodeOutOfRange { node: 3, node_count: 3 }));
    assert_eq!(graph.m(), 1);

    graph.add_edge(1, 7, true).unwrap();
    assert_eq!(graph.n(), 8);
    assert!(graph.has_edge(7, 1));
}

#[test]
fn test_load_checks_declared_edge_count() {
    let listing = EdgeListing {
        node_count: 3,
        declared_edges: Some(3),
        edges: vec![(0, 1), (1, 2), (2, 2)],
    };
    let err = Graph::load(listing).unwrap_err();
    assert!(matches!(err, Error::Format(_)));

    let listing = EdgeListing {
        node_count: 3,
        declared_edges: Some(2),
        edges: vec![(0, 1), (1, 2), (2, 2)],
    };
    let graph = Graph::load(listing).unwrap();
    assert_eq!(graph.m(), 2);
}

#[test]
fn test_load_drops_repeated_edges_after_count_check() {
    // One square, every edge listed twice (once reversed).
    let square = [(0, 1), (1, 2), (2, 3), (3, 0)];
    let mut edges: Vec<(i64, i64)> = square.iter().map(|&(u, v)| (u, v)).collect();
    edges.extend(square.iter().map(|&(u, v)| (v, u)));
    let listing = EdgeListing {
        node_count: 4,
        declared_edges: Some(8),
        edges,
    };
    let graph = Graph::load(listing).unwrap();
    assert_eq!(graph.m(), 4);
    assert_eq!(graph.edges(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(graph.exact_square_count(), 1);
}

#[test]
fn test_load_rejects_negative_and_large_ids() {
    let negative = EdgeListing {
        node_count: 2,
        declared_edges: None,
        edges: vec![(-1, 1)],
    };
    assert!(matches!(
        Graph::load(negative),
        Err(Error::NodeOutOfRange { node: -1, .. })
    ));

    let large = EdgeListing {
        node_count: 2,
        declared_edges: None,
        edges: vec![(0, 2)],
    };
    assert!(matches!(
        Graph::load(large),
        Err(Error::NodeOutOfRange { node: 2, .. })
    ));
}

#[test]
fn test_degeneracy() {
    assert_eq!(Graph::with_nodes(4).compute_degeneracy(), 0);
    assert_eq!(Graph::from_edges([(0, 1), (1, 2), (2, 3)]).compute_degeneracy(), 1);
    assert_eq!(Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).compute_degeneracy(), 2);
    assert_eq!(complete_graph(5).compute_degeneracy(), 4);

    // K4 with a pendant path attached stays 3-degenerate.
    let mut edges: Vec<Edge> = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
    edges.extend([(3, 4), (4, 5)]);
    assert_eq!(Graph::from_edges(edges).compute_degeneracy(), 3);
}

#[test]
fn test_squares_completed_by_edge() {
    // 4-cycle 0-1-2-3 plus chord-free extra square 1-4-5-2 sharing edge {1,2}.
    let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (1, 4), (4, 5), (5, 2)]);
    assert_eq!(graph.exact_square_count(), 2);
    assert_eq!(graph.count_squares_completed_by_edge(1, 2), 2);
    assert_eq!(graph.count_squares_completed_by_edge(0, 1), 1);
    assert_eq!(graph.count_squares_completed_by_edge(4, 5), 1);

    // Summing over all edges counts each square once per edge.
    let sum: u64 = graph
        .edges()
        .iter()
        .map(|&(u, v)| graph.count_squares_completed_by_edge(u, v))
        .sum();
    assert_eq!(sum, 4 * graph.exact_square_count());
}

#[test]
fn test_unnormalized_membership() {
    let mut graph = Graph::default();
    graph.add_edge(3, 1, true).unwrap();
    graph.add_edge(3, 0, true).unwrap();
    assert!(graph.has_edge(3, 0));
    assert!(graph.has_edge(1, 3));
    assert!(!graph.has_edge(0, 1));
}

#[test]
fn test_counts_ignore_repeats_before_normalize() {
    let mut graph = Graph::with_nodes(4);
    for _ in 0..2 {
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            graph.add_edge(u, v, false).unwrap();
            graph.add_edge(v, u, false).unwrap();
        }
    }
    assert_eq!(graph.m(), 16);
    assert_eq!(graph.degree(0), 8);

    assert_eq!(graph.exact_square_count(), 1);
    assert_eq!(graph.count_squares_completed_by_edge(0, 1), 1);
    assert_eq!(graph.compute_degeneracy(), 2);

    graph.normalize();
    assert_eq!(graph.m(), 4);
    assert_eq!(graph.exact_square_count(), 1);
    assert_eq!(graph.count_squares_completed_by_edge(0, 1), 1);
}
