//! Benchmark comparing the fixed-precision counter with floating-point counters.
//!
//! Measures concurrent fractional increments on:
//! 1. `FixedPrecisionCounter` (one `fetch_add` on a scaled `AtomicI64`)
//! 2. `prometheus::Counter` (compare-and-swap loop on an `f64`)
//! 3. A bare `AtomicI64` as the lower bound
//!
//! Run with:
//! ```bash
//! cargo bench --bench fixed_vs_float
//! ```

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimali::counter::FixedPrecisionCounter;

const NUM_THREADS: usize = 8;
const ITERATIONS_PER_THREAD: usize = 100_000;
const DELTA: f64 = 0.125;

fn bench_fractional_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractional_increment");
    let label = format!("{}threads x {}iter", NUM_THREADS, ITERATIONS_PER_THREAD);

    group.bench_function(BenchmarkId::new("FixedPrecisionCounter", &label), |b| {
        b.iter(|| {
            let counter = FixedPrecisionCounter::new("bench", "bench", 3).unwrap();
            let mut handles = vec![];

            for _ in 0..NUM_THREADS {
                let counter = counter.clone();
                handles.push(thread::spawn(move || {
                    for _ in 0..ITERATIONS_PER_THREAD {
                        counter.add(DELTA);
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(counter.get())
        })
    });

    group.bench_function(BenchmarkId::new("prometheus::Counter (f64)", &label), |b| {
        b.iter(|| {
            let counter = prometheus::Counter::new("bench", "bench").unwrap();
            let mut handles = vec![];

            for _ in 0..NUM_THREADS {
                let counter = counter.clone();
                handles.push(thread::spawn(move || {
                    for _ in 0..ITERATIONS_PER_THREAD {
                        counter.inc_by(DELTA);
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(counter.get())
        })
    });

    group.bench_function(BenchmarkId::new("AtomicI64 (raw)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(AtomicI64::new(0));
            let mut handles = vec![];

            for _ in 0..NUM_THREADS {
                let counter = Arc::clone(&counter);
                handles.push(thread::spawn(move || {
                    for _ in 0..ITERATIONS_PER_THREAD {
                        counter.fetch_add(125, Ordering::Relaxed);
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(counter.load(Ordering::Relaxed))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fractional_increment);
criterion_main!(benches);
