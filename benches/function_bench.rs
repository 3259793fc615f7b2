//! Benchmark for stateful function wrappers: once, memoize, throttle and delay.
//!
//! Measures the per-call overhead each wrapper adds to a cheap callback.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use underbar::function::{delay, memoize, once, throttle};
use underbar::schedule::ManualScheduler;

fn fibonacci(index: u64) -> u64 {
    (0..index).fold((0_u64, 1_u64), |(current, next), _| (next, current.wrapping_add(next))).0
}

// =============================================================================
// Once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let wrapper = once(fibonacci);
            black_box(wrapper.call(black_box(30)))
        });
    });

    let warmed = once(fibonacci);
    warmed.call(30);
    group.bench_function("cached_call", |bencher| {
        bencher.iter(|| black_box(warmed.call(black_box(31))));
    });

    group.finish();
}

// =============================================================================
// Memoize Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for distinct in [1_u64, 16, 256] {
        let memoized = memoize(fibonacci);
        group.bench_with_input(
            BenchmarkId::new("cycling_keys", distinct),
            &distinct,
            |bencher, &distinct| {
                let mut counter = 0_u64;
                bencher.iter(|| {
                    counter = (counter + 1) % distinct;
                    black_box(memoized.call(black_box(counter)))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Throttle and Delay Benchmarks
// =============================================================================

fn benchmark_throttle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("throttle");

    let scheduler = ManualScheduler::new();
    let throttled = throttle(scheduler.clone(), |value: u64| value + 1, Duration::from_millis(10));

    group.bench_function("armed_call", |bencher| {
        throttled.call(0).ok();
        bencher.iter(|| black_box(throttled.call(black_box(1))));
    });

    group.bench_function("window_cycle", |bencher| {
        bencher.iter(|| {
            let result = throttled.call(black_box(2));
            scheduler.advance(Duration::from_millis(10));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_delay(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delay");

    for batch in [1_u64, 64, 1_024] {
        group.bench_with_input(BenchmarkId::new("schedule_and_fire", batch), &batch, |bencher, &batch| {
            bencher.iter(|| {
                let scheduler = ManualScheduler::new();
                for wait in 0..batch {
                    delay(
                        &scheduler,
                        |value: u64| {
                            black_box(value);
                        },
                        Duration::from_micros(wait),
                        wait,
                    )
                    .ok();
                }
                black_box(scheduler.run_until_idle())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_once,
    benchmark_memoize,
    benchmark_throttle,
    benchmark_delay
);
criterion_main!(benches);
