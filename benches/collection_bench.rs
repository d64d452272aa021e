//! Collection builder benchmarks.
//!
//! Compares `linked_set` against a plain `HashSet` build for the same input,
//! and measures merging several sources through `dyn Collection`.
//!
//! Inputs hold duplicates (values repeat every `size / 2`) so the set kinds do
//! real deduplication work.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use terse::collection::{Collection, hash_set, linked_set, linked_set_merged, vector_merged};

const SIZES: [i32; 4] = [4, 8, 100, 10000];

fn generate_elements(size: i32) -> Vec<i32> {
    (0..size).map(|value| value % (size / 2).max(1)).collect()
}

fn benchmark_linked_set_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linked_set_build");

    for size in SIZES {
        let elements = generate_elements(size);
        group.bench_with_input(BenchmarkId::new("linked_set", size), &elements, |bencher, elements| {
            bencher.iter(|| black_box(linked_set(Some(black_box(elements.as_slice())))));
        });
        group.bench_with_input(BenchmarkId::new("hash_set", size), &elements, |bencher, elements| {
            bencher.iter(|| black_box(hash_set(Some(black_box(elements.as_slice())))));
        });
    }

    group.finish();
}

fn benchmark_merge_mixed_sources(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge_mixed_sources");

    for size in SIZES {
        let first = generate_elements(size);
        let second = linked_set(Some(first.as_slice()));
        let third = hash_set(Some(first.as_slice()));
        let sources: [Option<&dyn Collection<Item = i32>>; 3] =
            [Some(&first), Some(&second), Some(&third)];

        group.bench_with_input(BenchmarkId::new("vector_merged", size), &sources, |bencher, sources| {
            bencher.iter(|| black_box(vector_merged(sources[0], black_box(&sources[1..]))));
        });
        group.bench_with_input(
            BenchmarkId::new("linked_set_merged", size),
            &sources,
            |bencher, sources| {
                bencher.iter(|| black_box(linked_set_merged(sources[0], black_box(&sources[1..]))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_linked_set_build, benchmark_merge_mixed_sources);
criterion_main!(benches);
