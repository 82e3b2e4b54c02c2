use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

/// Benchmarks run if their name contains the `BENCH_FILTER` env var, or always if it is unset.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER: OnceCell<Option<String>> = OnceCell::new();

    FILTER
        .get_or_init(|| env::var("BENCH_FILTER").ok())
        .as_ref()
        .map(|filter| name.contains(filter.as_str()))
        .unwrap_or(true)
}

#[inline(never)]
pub fn bench_fn<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    test_fn: impl Fn(&mut [T]),
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let bench_name = format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_len}");
    if !should_run_benchmark(&bench_name) {
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched_ref(
            || transform(pattern_provider(test_len)),
            |test_data| {
                test_fn(black_box(test_data.as_mut_slice()));
                black_box(test_data); // side-effect
            },
            batch_size,
        )
    });
}
