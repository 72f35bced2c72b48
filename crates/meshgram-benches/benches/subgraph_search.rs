// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: embedding enumeration of the mark-quad pattern
//!
//! Hosts are square grids of `side x side` quads. Every cell yields eight
//! embeddings (the symmetries of a square), so the result size grows with
//! the cell count while candidate generation stays local to each anchor.
//!
//! Throughput "elements" are the incidence-graph vertices of the host.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meshgram_core::{find_embeddings, Production};
use meshgram_rules::mesh::quad_grid;
use meshgram_rules::MarkQuad;
use std::time::Duration;

fn bench_subgraph_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("subgraph_search");
    group
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(8))
        .sample_size(50);
    let pattern = MarkQuad.left_side();
    for &side in &[2usize, 4, 8, 16] {
        let Ok(host) = quad_grid("g", side, side) else {
            continue;
        };
        let counts = host.counts();
        group.throughput(Throughput::Elements((counts.regular + counts.hyper) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &host, |b, host| {
            b.iter(|| {
                let found = find_embeddings(&pattern, host);
                criterion::black_box(found.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_subgraph_search);
criterion_main!(benches);
