// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: canonical state hash over quad grids
//!
//! Measures sorting plus BLAKE3 hashing of every node and hyperedge record.
//! Throughput "elements" are nodes plus hyperedges.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meshgram_core::state_hash;
use meshgram_rules::mesh::quad_grid;
use std::time::Duration;

fn bench_state_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_hash");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(6))
        .sample_size(60);
    for &side in &[4usize, 16, 64] {
        let Ok(host) = quad_grid("g", side, side) else {
            continue;
        };
        let counts = host.counts();
        group.throughput(Throughput::Elements((counts.regular + counts.hyper) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &host, |b, host| {
            b.iter(|| criterion::black_box(state_hash(host)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_state_hash);
criterion_main!(benches);
