use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphkit::Graph;

/// Deterministic pseudo-random graph: a spanning chain plus `extra` chords.
fn build_graph(directed: bool, size: usize, extra: usize) -> Graph {
    let mut graph = Graph::with_vertices(directed, size);
    for v in 1..size {
        let _ = graph.add_weighted_edge(v - 1, v, 10);
    }
    let mut state = 0x2545_f491_u64;
    for _ in 0..extra {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let u = (state % size as u64) as usize;
        let v = ((state >> 32) % size as u64) as usize;
        let _ = graph.add_weighted_edge(u, v, (state % 20) as i64 + 1);
    }
    graph
}

fn bench_graph_sparse_remove(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_sparse_remove", |b| {
        b.iter(|| {
            let mut graph = build_graph(true, size, 0);
            // Remove middle vertex; every later id shifts down.
            black_box(graph.remove_vertex(size / 2))
        });
    });
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traversal");
    for size in [100, 1000] {
        let graph = build_graph(true, size, size * 4);

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| black_box(g.bfs(0)))
        });
        group.bench_with_input(BenchmarkId::new("dfs_forest", size), &graph, |b, g| {
            b.iter(|| black_box(g.dfs_forest(0)))
        });
        group.bench_with_input(BenchmarkId::new("scc", size), &graph, |b, g| {
            b.iter(|| black_box(g.strongly_connected_components()))
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shortest Paths");
    for size in [100, 300] {
        let graph = build_graph(true, size, size * 4);

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, g| {
            b.iter(|| black_box(g.dijkstra(0)))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, g| {
            b.iter(|| black_box(g.bellman_ford(0)))
        });
    }

    let small = build_graph(true, 100, 400);
    group.bench_function("floyd_warshall/100", |b| b.iter(|| black_box(small.floyd_warshall())));
    group.finish();
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spanning Trees");
    let graph = build_graph(false, 500, 2000);

    group.bench_function("prim", |b| b.iter(|| black_box(graph.prim_mst())));
    group.bench_function("kruskal", |b| b.iter(|| black_box(graph.kruskal_mst())));
    group.finish();
}

criterion_group!(
    benches,
    bench_graph_sparse_remove,
    bench_traversals,
    bench_shortest_paths,
    bench_spanning_trees
);
criterion_main!(benches);
