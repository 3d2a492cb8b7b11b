//! Cost of `clone_node` with each deep-copy capability.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motif::{MarshalCopier, PrototypeArena};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

const CLONES: usize = 256;

#[derive(Clone, Serialize, Deserialize)]
struct Payload {
    stamp: SystemTime,
    tags: Vec<String>,
}

fn payload() -> Payload {
    Payload {
        stamp: SystemTime::now(),
        tags: (0..8).map(|i| format!("tag-{i}")).collect(),
    }
}

fn bench_clone_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("prototype_clone");

    group.bench_function("clone_copier", |b| {
        b.iter(|| {
            PrototypeArena::scope(|mut arena| {
                let mut key = arena.insert(245, payload());
                for _ in 0..CLONES {
                    key = arena.clone_node(black_box(key)).unwrap();
                }
                arena.len()
            })
        })
    });

    group.bench_function("marshal_copier", |b| {
        b.iter(|| {
            PrototypeArena::scope_with(MarshalCopier, |mut arena| {
                let mut key = arena.insert(245, payload());
                for _ in 0..CLONES {
                    key = arena.clone_node(black_box(key)).unwrap();
                }
                arena.len()
            })
        })
    });

    group.finish();
}

criterion_group!(benches, bench_clone_node);
criterion_main!(benches);
