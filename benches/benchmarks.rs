//! Criterion benchmarks for rat-graph.

use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use rat_graph::engine::{IdentityTitles, Investigator};
use rat_graph::format::TgfWriter;
use rat_graph::graph::{bfs, dfs, AdjListsGraph, GraphBuilder, RatGraph};

/// Random dataset text: `users` accounts, each in up to `max_stories` of `stories` stories.
fn make_dataset(users: usize, stories: usize, max_stories: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::from("name id tweets stories ids\n");
    for i in 0..users {
        let n = rng.gen_range(1..=max_stories);
        let ids: Vec<String> = (0..n)
            .map(|_| format!("{}", 1_000_000 + rng.gen_range(0..stories)))
            .collect();
        text.push_str(&format!(
            "user_{} {} {} {} {}\n",
            i,
            i,
            rng.gen_range(0..10_000),
            n,
            ids.join(",")
        ));
    }
    text
}

fn make_rat(users: usize, stories: usize, max_stories: usize) -> RatGraph {
    let mut builder = GraphBuilder::new();
    builder
        .read_from(Cursor::new(make_dataset(users, stories, max_stories)))
        .unwrap();
    builder.build()
}

/// Random directed graph over integers.
fn make_graph(vertices: usize, arcs_per_vertex: usize) -> AdjListsGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut g = AdjListsGraph::new();
    for v in 0..vertices as u32 {
        g.add_vertex(v);
    }
    for v in 0..vertices as u32 {
        for _ in 0..arcs_per_vertex {
            g.add_arc(&v, &rng.gen_range(0..vertices as u32));
        }
    }
    g
}

fn bench_traversal(c: &mut Criterion) {
    let g = make_graph(10_000, 4);
    c.bench_function("bfs_10k", |b| b.iter(|| bfs(&g, &0)));
    c.bench_function("dfs_10k", |b| b.iter(|| dfs(&g, &0).unwrap()));
    c.bench_function("predecessors_10k", |b| b.iter(|| g.predecessors(&42)));
}

fn bench_ingest(c: &mut Criterion) {
    let text = make_dataset(1_000, 200, 5);
    c.bench_function("ingest_1k_accounts", |b| {
        b.iter(|| {
            let mut builder = GraphBuilder::new();
            builder.read_from(Cursor::new(text.as_str())).unwrap();
            builder.build()
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let rat = make_rat(1_000, 200, 5);
    c.bench_function("tgf_export_1k_accounts", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            TgfWriter::new().write_to(rat.graph(), &mut buf).unwrap();
            buf
        })
    });
}

fn bench_analytics(c: &mut Criterion) {
    let rat = make_rat(100, 40, 3);
    let inv = Investigator::new(&rat, IdentityTitles);
    c.bench_function("largest_component_100_accounts", |b| {
        b.iter(|| inv.largest_connected_component())
    });
    c.bench_function("central_nodes_100_accounts", |b| b.iter(|| inv.central_nodes()));
}

criterion_group!(
    benches,
    bench_traversal,
    bench_ingest,
    bench_export,
    bench_analytics
);
criterion_main!(benches);
