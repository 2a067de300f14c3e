use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use relgraph::{
    edge::Edge,
    graph::RelationGraph,
    traversal::{SearchOrder, Strategy},
};
use std::hint::black_box;

/// `layers` layers of `width` vertices, every vertex pointing at the three
/// nearest vertices of the next layer, fed by a single root.
fn layered(layers: u32, width: u32) -> RelationGraph<u32> {
    let id = |layer: u32, slot: u32| 1 + layer * width + slot;
    let mut edges: Vec<Edge<u32>> = (0..width).map(|s| Edge::new(0, id(0, s))).collect();
    for layer in 0..layers - 1 {
        for slot in 0..width {
            for offset in 0..3 {
                let next = (slot + offset) % width;
                edges.push(Edge::new(id(layer, slot), id(layer + 1, next)));
            }
        }
    }
    RelationGraph::new(0..=layers * width, edges)
}

fn bench_traversals(c: &mut Criterion) {
    let graph = layered(40, 50);
    let mut group = c.benchmark_group("traversal");

    for order in [SearchOrder::BreadthFirst, SearchOrder::DepthFirst] {
        for strategy in [Strategy::Iterative, Strategy::Recursive] {
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), format!("{strategy:?}")),
                &graph,
                |b, g| b.iter(|| black_box(g.search(order, strategy))),
            );
        }
    }
    group.finish();
}

fn bench_relation(c: &mut Criterion) {
    let graph = layered(40, 50);
    c.bench_function("is_equivalence", |b| {
        b.iter(|| black_box(graph.is_equivalence()))
    });
    c.bench_function("roots", |b| b.iter(|| black_box(graph.roots())));
}

criterion_group!(benches, bench_traversals, bench_relation);
criterion_main!(benches);
