//! Counter Benchmarks
//!
//! Cost of one increment-and-read for each counter kind, with static and
//! dynamic dispatch.
//!
//! ```bash
//! cargo bench --bench counter
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally::{create, create_counter, create_counter_fn, create_pair_counter, CounterKind};

fn call_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_call");

    let mut single = create_counter();
    group.bench_function("single", |b| b.iter(|| black_box(single.call())));

    let mut pair = create_pair_counter();
    group.bench_function("pair", |b| b.iter(|| black_box(pair.call())));

    let mut boxed = create(CounterKind::Single);
    group.bench_function("boxed_single", |b| b.iter(|| black_box(boxed.call())));

    let mut closure = create_counter_fn();
    group.bench_function("closure", |b| b.iter(|| black_box(closure())));

    group.finish();
}

fn create_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_create");

    group.bench_function("single", |b| b.iter(|| black_box(create_counter())));
    group.bench_function("boxed_pair", |b| {
        b.iter(|| black_box(create(CounterKind::Pair)))
    });

    group.finish();
}

criterion_group!(benches, call_benchmarks, create_benchmarks);
criterion_main!(benches);
