use criterion::{black_box, BatchSize, Criterion};

use forkjoin_sort::other::partition::{self, Partition};
use forkjoin_sort::other::rotate::rotate;

use crate::modules::util::should_run_benchmark;

fn bench_partition_impl<P: Partition, T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = format!(
        "{}-hot-{}-{}-{}",
        P::name(),
        transform_name,
        pattern_name,
        test_len
    );

    if test_len == 0 || !should_run_benchmark(&bench_name) {
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched_ref(
            || {
                let values = pattern_provider(test_len);
                // Partition against the value that landed in the middle, sorted patterns then
                // split evenly.
                let pivot = transform(vec![values[test_len / 2]]);

                (transform(values), pivot)
            },
            |(test_data, pivot)| {
                let pivot = &pivot[0];
                black_box(P::partition_by(black_box(test_data.as_mut_slice()), |elem| {
                    elem < pivot
                }));
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_rotate<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Uneven groups make the rotation take more than one pass.
    for (mid_name, mid) in [("half", test_len / 2), ("third", test_len / 3)] {
        let bench_name =
            format!("rust_rotate_{mid_name}-hot-{transform_name}-{pattern_name}-{test_len}");

        if !should_run_benchmark(&bench_name) {
            continue;
        }

        c.bench_function(&bench_name, |b| {
            b.iter_batched_ref(
                || transform(pattern_provider(test_len)),
                |test_data| {
                    black_box(rotate(black_box(test_data.as_mut_slice()), mid));
                },
                BatchSize::LargeInput,
            )
        });
    }
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    bench_partition_impl::<partition::PartitionImpl, T>(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
    );

    bench_rotate(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
    );
}
