//! Fallback executor benchmarks.
//!
//! Measures the overhead of the panic boundary on the success path, and the
//! cost of recovering from an `Err` versus from a caught panic.

use criterion::{Criterion, criterion_group, criterion_main};
use std::convert::Infallible;
use std::hint::black_box;
use terse::fallback::{run_or_fail, run_or_recover};

fn divide(dividend: i32, divisor: i32) -> Result<i32, &'static str> {
    dividend.checked_div(divisor).ok_or("/ by zero")
}

fn benchmark_success_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fallback_success_path");

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(divide(black_box(10), black_box(2))));
    });
    group.bench_function("run_or_fail", |bencher| {
        bencher.iter(|| black_box(run_or_fail(|| divide(black_box(10), black_box(2)))));
    });

    group.finish();
}

fn benchmark_recovery_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fallback_recovery_path");

    group.bench_function("recover_from_error", |bencher| {
        bencher.iter(|| {
            black_box(run_or_recover(
                || divide(black_box(1), black_box(0)),
                |_| Ok::<_, Infallible>(-1),
            ))
        });
    });

    // Silence the default hook so the benchmark output is not flooded.
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    group.bench_function("recover_from_panic", |bencher| {
        bencher.iter(|| {
            black_box(run_or_recover(
                || Ok::<_, Infallible>(1 / black_box(0)),
                |_| Ok::<_, Infallible>(-1),
            ))
        });
    });
    std::panic::set_hook(previous_hook);

    group.finish();
}

criterion_group!(benches, benchmark_success_path, benchmark_recovery_path);
criterion_main!(benches);
