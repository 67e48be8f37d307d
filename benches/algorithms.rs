//! Benchmarks for the graph algorithms.
//!
//! Graphs are generated deterministically from a fixed seed:
//! - Traversal (BFS, iterative DFS) on a sparse graph
//! - Dijkstra with both frontier strategies on sparse and dense graphs
//! - Kruskal on a sparse edge list
//! - Union-Find with random unions

extern crate edgewise;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use edgewise::{
    graph::algorithms::{dijkstra, kruskal_mst},
    utils::DisjointSet,
    Edge, FrontierSelection, Graph, VertexId,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Builds an undirected graph with `vertex_count` vertices and about
/// `vertex_count * degree / 2` random edges.
fn random_graph(vertex_count: usize, degree: usize) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph = Graph::with_capacity(vertex_count, degree);
    for _ in 0..vertex_count * degree / 2 {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        graph
            .add_edge(u, v, rng.gen_range(1..100))
            .expect("generated vertices are in range");
    }
    graph
}

/// Benchmark BFS and iterative DFS over 10k vertices with average degree 8.
fn bench_traversal(c: &mut Criterion) {
    let graph = random_graph(10_000, 8);

    c.bench_function("bfs_10k", |b| {
        b.iter(|| black_box(graph.bfs(black_box(0)).unwrap()));
    });

    c.bench_function("dfs_10k", |b| {
        b.iter(|| black_box(graph.dfs(black_box(0)).unwrap()));
    });
}

/// Benchmark Dijkstra with both frontier strategies.
fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for (name, graph) in [
        ("sparse_2k", random_graph(2_000, 4)),
        ("dense_500", random_graph(500, 200)),
    ] {
        for frontier in [FrontierSelection::LinearScan, FrontierSelection::BinaryHeap] {
            group.bench_with_input(
                BenchmarkId::new(frontier.to_string(), name),
                &graph,
                |b, graph| {
                    b.iter(|| black_box(dijkstra(graph, VertexId::new(0), frontier)));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark Kruskal over 20k random edges on 5k vertices.
fn bench_kruskal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let edges: Vec<Edge<u32>> = (0..20_000)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..5_000),
                rng.gen_range(0..5_000),
                rng.gen_range(0..1_000),
            )
        })
        .collect();

    c.bench_function("kruskal_20k_edges", |b| {
        b.iter(|| black_box(kruskal_mst(black_box(&edges), 5_000).unwrap()));
    });
}

/// Benchmark 100k random unions followed by a find on every element.
fn bench_disjoint_set(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let pairs: Vec<(usize, usize)> = (0..100_000)
        .map(|_| (rng.gen_range(0..50_000), rng.gen_range(0..50_000)))
        .collect();

    c.bench_function("union_find_100k", |b| {
        b.iter(|| {
            let mut sets = DisjointSet::new(50_000);
            for &(x, y) in &pairs {
                sets.union(x, y).unwrap();
            }
            for x in 0..50_000 {
                black_box(sets.find(x).unwrap());
            }
            black_box(sets.set_count())
        });
    });
}

criterion_group!(
    benches,
    bench_traversal,
    bench_dijkstra,
    bench_kruskal,
    bench_disjoint_set
);
criterion_main!(benches);
