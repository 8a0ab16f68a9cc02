//! Benchmark for PersistentSet vs standard BTreeSet.
//!
//! Values are inserted in a scrambled order so the unbalanced tree stays
//! shallow; ascending input would measure the degenerate case instead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use persistent_set::persistent::PersistentSet;
use std::collections::BTreeSet;
use std::hint::black_box;

/// Spreads `0..size` over the key space with a multiplicative hash.
fn scrambled(size: u64) -> Vec<u64> {
    (0..size)
        .map(|index| index.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 16)
        .collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);

        group.bench_with_input(BenchmarkId::new("PersistentSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut set = PersistentSet::new();
                for &key in keys {
                    set.insert(black_box(key));
                }
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(black_box(key));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// find Benchmark
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);
        let persistent_set: PersistentSet<u64> = keys.iter().copied().collect();
        let standard_set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("PersistentSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut found = 0;
                for key in keys {
                    if persistent_set.contains(black_box(key)) {
                        found += 1;
                    }
                }
                black_box(found)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut found = 0;
                for key in keys {
                    if standard_set.contains(black_box(key)) {
                        found += 1;
                    }
                }
                black_box(found)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Versioning Benchmark
// =============================================================================

fn benchmark_erase_from_snapshot(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("erase_from_snapshot");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);
        let base: PersistentSet<u64> = keys.iter().copied().collect();

        // Every erase works on a fresh O(1) copy of the same base version
        group.bench_with_input(BenchmarkId::new("PersistentSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                for key in keys.iter().step_by(10) {
                    let mut version = base.clone();
                    version.remove(black_box(key));
                    black_box(version);
                }
            });
        });

        let standard: BTreeSet<u64> = keys.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                for key in keys.iter().step_by(10) {
                    let mut version = standard.clone();
                    version.remove(black_box(key));
                    black_box(version);
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Cursor Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let set: PersistentSet<u64> = scrambled(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("iter", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("cursor", size), &set, |bencher, set| {
            bencher.iter(|| {
                let mut total = 0u64;
                let mut cursor = set.begin();
                while let Some(value) = cursor.get() {
                    total = total.wrapping_add(*value);
                    cursor.move_next();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_erase_from_snapshot,
    benchmark_traversal
);
criterion_main!(benches);
