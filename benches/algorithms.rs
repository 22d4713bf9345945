//! Benchmarks for the traced algorithm suite.
//!
//! Measures full runs, step recording included, on generated topologies:
//! - Traversal over a square grid
//! - Shortest paths on a grid and on a directed layered mesh
//! - Spanning trees on a grid
//! - Maximum flow across a layered mesh
//! - Eulerian walks over a ring with chords
//! - Bipartite check on a grid

extern crate topograph;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use topograph::{run, Algorithm, AlgorithmRequest, Edge, Graph, NodeKind};

/// A `side` x `side` undirected grid with varied weights.
fn grid(side: usize) -> Graph {
    let mut graph = Graph::undirected();
    for row in 0..side {
        for col in 0..side {
            graph = graph.with_node(format!("n{row}_{col}"), NodeKind::Switch);
        }
    }
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                let weight = ((row * 7 + col * 3) % 11 + 1) as f64;
                graph.add_link(Edge::new(
                    format!("n{row}_{col}"),
                    format!("n{row}_{}", col + 1),
                    weight,
                ));
            }
            if row + 1 < side {
                let weight = ((row * 5 + col * 13) % 9 + 1) as f64;
                graph.add_link(Edge::new(
                    format!("n{row}_{col}"),
                    format!("n{}_{col}", row + 1),
                    weight,
                ));
            }
        }
    }
    graph
}

/// A directed mesh of `layers` layers, each fully linked to the next.
fn layered(layers: usize, width: usize) -> Graph {
    let mut graph = Graph::directed()
        .with_node("src", NodeKind::Server)
        .with_node("dst", NodeKind::Pc);
    for layer in 0..layers {
        for slot in 0..width {
            graph = graph.with_node(format!("l{layer}_{slot}"), NodeKind::Router);
        }
    }
    for slot in 0..width {
        graph.add_link(Edge::new("src", format!("l0_{slot}"), 10.0));
        graph.add_link(Edge::new(format!("l{}_{slot}", layers - 1), "dst", 10.0));
    }
    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                let weight = ((from * 3 + to * 5 + layer) % 7 + 1) as f64;
                graph.add_link(Edge::new(
                    format!("l{layer}_{from}"),
                    format!("l{}_{to}", layer + 1),
                    weight,
                ));
            }
        }
    }
    graph
}

/// An undirected ring where every node also links to the node two steps ahead.
/// Every degree is 4, so an Eulerian circuit exists.
fn ring_with_chords(size: usize) -> Graph {
    let mut graph = Graph::undirected();
    for i in 0..size {
        graph = graph.with_node(format!("r{i}"), NodeKind::Router);
    }
    for i in 0..size {
        graph.add_link(Edge::new(format!("r{i}"), format!("r{}", (i + 1) % size), 1.0));
        graph.add_link(Edge::new(format!("r{i}"), format!("r{}", (i + 2) % size), 2.0));
    }
    graph
}

/// Benchmark BFS over a 20x20 grid.
fn bench_bfs_grid(c: &mut Criterion) {
    let graph = grid(20);
    let request = AlgorithmRequest::new(Algorithm::Bfs).with_start("n0_0");

    c.bench_function("bfs_grid_20", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark DFS over a 20x20 grid.
fn bench_dfs_grid(c: &mut Criterion) {
    let graph = grid(20);
    let request = AlgorithmRequest::new(Algorithm::Dfs).with_start("n0_0");

    c.bench_function("dfs_grid_20", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Dijkstra corner to corner on a 15x15 grid.
fn bench_dijkstra_grid(c: &mut Criterion) {
    let graph = grid(15);
    let request = AlgorithmRequest::new(Algorithm::Dijkstra)
        .with_start("n0_0")
        .with_end("n14_14");

    c.bench_function("dijkstra_grid_15", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Bellman-Ford across a directed layered mesh.
fn bench_bellman_ford_layered(c: &mut Criterion) {
    let graph = layered(5, 6);
    let request = AlgorithmRequest::new(Algorithm::BellmanFord)
        .with_start("src")
        .with_end("dst");

    c.bench_function("bellman_ford_layered_5x6", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Prim on a 15x15 grid.
fn bench_prim_grid(c: &mut Criterion) {
    let graph = grid(15);
    let request = AlgorithmRequest::new(Algorithm::Prim);

    c.bench_function("prim_grid_15", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Kruskal on a 15x15 grid.
fn bench_kruskal_grid(c: &mut Criterion) {
    let graph = grid(15);
    let request = AlgorithmRequest::new(Algorithm::Kruskal);

    c.bench_function("kruskal_grid_15", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Edmonds-Karp across a directed layered mesh.
fn bench_edmonds_karp_layered(c: &mut Criterion) {
    let graph = layered(4, 5);
    let request = AlgorithmRequest::new(Algorithm::EdmondsKarp)
        .with_start("src")
        .with_end("dst");

    c.bench_function("edmonds_karp_layered_4x5", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Fleury on a 40 node ring with chords.
fn bench_fleury_ring(c: &mut Criterion) {
    let graph = ring_with_chords(40);
    let request = AlgorithmRequest::new(Algorithm::Fleury);

    c.bench_function("fleury_ring_40", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark Hierholzer on a 40 node ring with chords.
fn bench_hierholzer_ring(c: &mut Criterion) {
    let graph = ring_with_chords(40);
    let request = AlgorithmRequest::new(Algorithm::Hierholzer);

    c.bench_function("hierholzer_ring_40", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

/// Benchmark the bipartite check on a 20x20 grid.
fn bench_bipartite_grid(c: &mut Criterion) {
    let graph = grid(20);
    let request = AlgorithmRequest::new(Algorithm::Bipartite);

    c.bench_function("bipartite_grid_20", |b| {
        b.iter(|| black_box(run(black_box(&graph), &request)));
    });
}

criterion_group!(
    benches,
    // Traversal
    bench_bfs_grid,
    bench_dfs_grid,
    // Shortest paths
    bench_dijkstra_grid,
    bench_bellman_ford_layered,
    // Spanning trees
    bench_prim_grid,
    bench_kruskal_grid,
    // Flow
    bench_edmonds_karp_layered,
    // Eulerian walks
    bench_fleury_ring,
    bench_hierholzer_ring,
    // Partitioning
    bench_bipartite_grid,
);
criterion_main!(benches);
