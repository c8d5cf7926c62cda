//! Kruskal benchmarks on connected and sparse random graphs.
#![allow(clippy::expect_used)]

use codebook_bench::{GeneratorConfig, SizeTier, random_weighted_graph};
use codebook_core::kruskals;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for tier in [SizeTier::Small, SizeTier::Medium, SizeTier::Large, SizeTier::XLarge] {
        let connected = tier.config(42);
        let edges = random_weighted_graph(&connected);
        group.bench_function(BenchmarkId::new("connected", tier.label()), |b| {
            b.iter(|| kruskals(&edges, connected.size).expect("valid graph"));
        });

        let sparse = GeneratorConfig {
            connected: false,
            operations: connected.size / 2,
            ..connected
        };
        let sparse_edges = random_weighted_graph(&sparse);
        group.bench_function(BenchmarkId::new("forest", tier.label()), |b| {
            b.iter(|| kruskals(&sparse_edges, sparse.size).expect("valid graph"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kruskal);
criterion_main!(benches);
