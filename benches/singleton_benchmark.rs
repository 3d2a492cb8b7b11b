//! Fast-path access of `LazySingleton` compared with the standard once-cells.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use motif::{LazySingleton, SingletonRegistry};
use std::sync::{Mutex, OnceLock};
use std::thread;

const READS: usize = 1024;

fn bench_fast_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("singleton_fast_path");

    group.bench_function("lazy_singleton", |b| {
        let cell = LazySingleton::new();
        cell.get_or_init(|| 42u64);
        b.iter(|| {
            let mut sum = 0u64;
            for _ in 0..READS {
                sum = sum.wrapping_add(*black_box(&cell).get_or_init(|| 0));
            }
            sum
        })
    });

    group.bench_function("std_once_lock", |b| {
        let cell = OnceLock::new();
        cell.get_or_init(|| 42u64);
        b.iter(|| {
            let mut sum = 0u64;
            for _ in 0..READS {
                sum = sum.wrapping_add(*black_box(&cell).get_or_init(|| 0));
            }
            sum
        })
    });

    group.bench_function("mutex_option", |b| {
        let cell = Mutex::new(Some(42u64));
        b.iter(|| {
            let mut sum = 0u64;
            for _ in 0..READS {
                let guard = black_box(&cell).lock().unwrap();
                sum = sum.wrapping_add(guard.unwrap_or(0));
            }
            sum
        })
    });

    group.finish();
}

fn bench_first_access_race(c: &mut Criterion) {
    let mut group = c.benchmark_group("singleton_first_access");
    const THREADS: usize = 4;

    group.bench_function("registry_race", |b| {
        b.iter_batched(
            SingletonRegistry::new,
            |registry| {
                thread::scope(|s| {
                    for i in 0..THREADS {
                        let registry = &registry;
                        s.spawn(move || black_box(registry.get_instance(format!("T{i}"))).value().len());
                    }
                });
                registry
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_fast_path, bench_first_access_race);
criterion_main!(benches);
