// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_shout::banner::drag;
use std::hint::black_box;

fn bench_resolve_height(c: &mut Criterion) {
    c.bench_function("resolve_height_pinned", |b| {
        b.iter(|| drag::resolve_height(black_box(50.0), black_box(65.0), black_box(120.0)));
    });

    c.bench_function("resolve_height_tracking", |b| {
        b.iter(|| drag::resolve_height(black_box(-40.0), black_box(65.0), black_box(120.0)));
    });

    c.bench_function("resolve_height_damped", |b| {
        b.iter(|| drag::resolve_height(black_box(-40.0), black_box(65.0), black_box(71.0)));
    });
}

criterion_group!(benches, bench_resolve_height);
criterion_main!(benches);
