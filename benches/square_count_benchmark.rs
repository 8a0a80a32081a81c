use c4stream::{Color, ColoredGraph, Graph};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_edges(n: u32, m: usize, seed: u64) -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_exact_square_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_square_count");
    for &(n, m) in &[(1_000u32, 5_000usize), (5_000, 50_000)] {
        let graph = Graph::from_edges(random_edges(n, m, 42));
        group.bench_with_input(BenchmarkId::from_parameter(m), &graph, |b, graph| {
            b.iter(|| black_box(graph.exact_square_count()));
        });
    }
    group.finish();
}

fn bench_bicolored_square_count(c: &mut Criterion) {
    let edges = random_edges(2_000, 10_000, 7);
    let mut graph = ColoredGraph::new();
    for (i, &(u, v)) in edges.iter().enumerate() {
        let color = if i % 2 == 0 { Color::Sampled } else { Color::Induced };
        graph.add_edge(u, v, color);
    }

    c.bench_function("bicolored_square_count", |b| {
        b.iter(|| black_box(graph.bicolored_square_count()));
    });
}

fn bench_degeneracy(c: &mut Criterion) {
    let graph = Graph::from_edges(random_edges(5_000, 50_000, 3));
    c.bench_function("compute_degeneracy", |b| {
        b.iter(|| black_box(graph.compute_degeneracy()));
    });
}

criterion_group!(
    benches,
    bench_exact_square_count,
    bench_bicolored_square_count,
    bench_degeneracy
);
criterion_main!(benches);
