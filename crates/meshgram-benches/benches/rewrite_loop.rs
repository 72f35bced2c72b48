// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: full `apply` of the mark-quad production over a grid
//!
//! Each iteration starts from a fresh, unmarked grid (built in setup, not
//! timed) and runs the rewrite loop to exhaustion: one application per cell,
//! each preceded by a full subgraph search. The cost is therefore roughly
//! quadratic in the cell count.
//!
//! Throughput "elements" are the applications performed.
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use meshgram_core::{apply, Hypergraph};
use meshgram_rules::mesh::quad_grid;
use meshgram_rules::MarkQuad;
use std::time::Duration;

fn bench_rewrite_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite_loop");
    group
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10))
        .sample_size(30);
    for &side in &[2usize, 4, 8] {
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter_batched(
                || quad_grid("g", side, side).unwrap_or_else(|_| Hypergraph::new()),
                |mut host| {
                    let applied = apply(&mut host, &MarkQuad);
                    criterion::black_box(applied);
                },
                BatchSize::PerIteration,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rewrite_loop);
criterion_main!(benches);
